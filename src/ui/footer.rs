use crate::ui::app::{App, NoticeLevel, Tab};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let (message, message_style) = match app.notice() {
            Some(notice) => {
                let color = match notice.level {
                    NoticeLevel::Info => STATUS_OK,
                    NoticeLevel::Error => STATUS_ERROR,
                };
                (format!(" {}", notice.text), Style::default().fg(color))
            }
            None => (format!(" {}", hints(app.active_tab())), text_style),
        };
        let version = format!("v{} ", VERSION);

        // Char count, not byte count (for Unicode)
        let message_width = message.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(message_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(message, message_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn hints(tab: Tab) -> &'static str {
    match tab {
        Tab::News => "↑/↓: Scroll │ r: Refresh │ Tab: Next │ q: Quit",
        Tab::Profile => "r: Refresh │ Tab: Next │ q: Quit",
        Tab::Game => "Space: Click │ Tab: Next │ q: Quit",
        Tab::Referrals => "c: Copy link │ r: Refresh │ Tab: Next │ q: Quit",
        Tab::Shop => "↑/↓: Select │ Enter: Add to cart │ r: Refresh │ q: Quit",
        Tab::Cart => "+/-: Quantity │ d: Remove │ p: Payment │ Enter: Order │ q: Quit",
    }
}
