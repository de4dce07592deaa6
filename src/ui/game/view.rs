use crate::ui::game::state::GameState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::widgets::screen_block;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

pub fn render_game(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    let (balance, progress) = match state.stats {
        Some(stats) => (
            stats.bonus_balance.to_string(),
            stats.game_progress.to_string(),
        ),
        None => ("-".to_string(), "-".to_string()),
    };
    let label = Style::default().fg(MUTED_TEXT);

    let button = if state.pending {
        Span::styled("  ...  ", Style::default().fg(MUTED_TEXT).bg(ACTIVE_HIGHLIGHT))
    } else {
        Span::styled(
            "  [ TAP ME ]  ",
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Bonuses: ", label),
            Span::styled(balance, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("Progress: ", label),
            Span::styled(progress, Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(""),
        Line::from(button),
        Line::from(""),
    ];
    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            format!("Error: {error}"),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Every tap (Space/Enter) earns bonuses and advances the game.",
        label,
    )));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(screen_block("Game"))
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
