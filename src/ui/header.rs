use crate::ui::app::{App, Tab};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT,
};
use crate::ui::widgets::format_bonus;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled(" ", text_style)];
        for (idx, tab) in Tab::ALL.iter().enumerate() {
            let label = format!(" {} {} ", idx + 1, tab.title());
            if *tab == app.active_tab() {
                spans.push(Span::styled(
                    label,
                    Style::default()
                        .fg(ACCENT)
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(label, Style::default().fg(MUTED_TEXT)));
            }
        }

        let cart = app.cart();
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(
            format!("Cart: {} ({})", cart.item_count(), format_bonus(cart.total())),
            text_style,
        ));

        if let Some(name) = app.host_user().and_then(|user| user.display_name()) {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(name, text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
