//! Building blocks shared by the screen views.

use crate::ui::fetch::FetchState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn screen_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

/// Placeholder for a screen whose data is not available yet.
///
/// Returns `None` once the data is loaded and the screen can render it.
pub fn fetch_placeholder<'a, T>(
    state: &FetchState<T>,
    block: Block<'a>,
    loading_text: &'a str,
) -> Option<Paragraph<'a>> {
    let (text, style) = match state {
        FetchState::Loaded { .. } => return None,
        FetchState::Idle | FetchState::Loading { .. } => {
            (loading_text.to_string(), Style::default().fg(MUTED_TEXT))
        }
        FetchState::Failed { message, .. } => (
            format!("Error: {message}  (r: retry)"),
            Style::default().fg(STATUS_ERROR),
        ),
    };
    Some(
        Paragraph::new(Span::styled(text, style))
            .block(block)
            .wrap(Wrap { trim: true }),
    )
}

/// Vertical scroll that keeps `selected_line` (1-based end row of the
/// selected entry) inside a bordered `area`.
pub fn scroll_to_selection(selected_line: usize, area: Rect) -> u16 {
    let visible = usize::from(area.height.saturating_sub(2)).max(1);
    u16::try_from(selected_line.saturating_sub(visible)).unwrap_or(u16::MAX)
}

pub fn format_bonus(amount: impl std::fmt::Display) -> String {
    format!("{amount} pts")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_inside_viewport_needs_no_scroll() {
        assert_eq!(scroll_to_selection(5, Rect::new(0, 0, 40, 10)), 0);
    }

    #[test]
    fn selection_below_viewport_scrolls_it_to_the_bottom_row() {
        // 8 visible rows inside the borders
        assert_eq!(scroll_to_selection(12, Rect::new(0, 0, 40, 10)), 4);
        assert_eq!(scroll_to_selection(3, Rect::new(0, 0, 40, 2)), 2);
    }
}
