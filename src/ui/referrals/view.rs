use crate::ui::referrals::state::{CopyStatus, ReferralsState};
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::widgets::{fetch_placeholder, format_bonus, screen_block};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

pub fn render_referrals(frame: &mut Frame<'_>, area: Rect, state: &ReferralsState) {
    let block = screen_block("Referral program");
    if let Some(placeholder) = fetch_placeholder(&state.summary, block.clone(), "Loading...") {
        frame.render_widget(placeholder, area);
        return;
    }
    let Some(summary) = state.summary.data() else {
        return;
    };

    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![
        Line::from(Span::styled("Your referral link:", label)),
        Line::from(Span::styled(
            summary.referral_link.clone(),
            value.add_modifier(Modifier::UNDERLINED),
        )),
    ];
    match &state.copy_status {
        Some(CopyStatus::Copied) => lines.push(Line::from(Span::styled(
            "Link copied",
            Style::default().fg(STATUS_OK),
        ))),
        Some(CopyStatus::Failed(message)) => lines.push(Line::from(Span::styled(
            format!("Could not copy: {message}"),
            Style::default().fg(STATUS_ERROR),
        ))),
        None => lines.push(Line::from(Span::styled("c: copy link", label))),
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Invited: ", label),
        Span::styled(summary.invited_count.to_string(), value),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Bonuses earned: ", label),
        Span::styled(
            format_bonus(summary.bonus_earned),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Invited users",
        value.add_modifier(Modifier::BOLD),
    )));
    if summary.invited_users.is_empty() {
        lines.push(Line::from(Span::styled("Nobody yet.", label)));
    }
    for user in &summary.invited_users {
        lines.push(Line::from(vec![
            Span::styled(user.full_name.clone(), value),
            Span::styled(format!("  TG ID: {}", user.tg_id), label),
        ]));
    }

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}
