use crate::ui::news::state::NewsState;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT};
use crate::ui::widgets::{fetch_placeholder, screen_block};
use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

pub fn render_news(frame: &mut Frame<'_>, area: Rect, state: &NewsState) {
    let block = screen_block("News");
    if let Some(placeholder) = fetch_placeholder(&state.feed, block.clone(), "Loading news...") {
        frame.render_widget(placeholder, area);
        return;
    }
    let posts = state.feed.data().map(Vec::as_slice).unwrap_or_default();

    let mut lines = Vec::new();
    if posts.is_empty() {
        lines.push(Line::from(Span::styled(
            "No news yet.",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    for post in posts.iter().skip(state.scroll) {
        lines.push(Line::from(Span::styled(
            post.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )));
        if let Some(url) = &post.image_url {
            lines.push(Line::from(Span::styled(
                format!("[image] {url}"),
                Style::default().fg(MUTED_TEXT),
            )));
        }
        lines.push(Line::from(post.text.clone()));
        let published = post.created_at.with_timezone(&Local);
        lines.push(Line::from(Span::styled(
            published.format("%d.%m.%Y %H:%M").to_string(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}
