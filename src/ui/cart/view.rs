use crate::cart::CartStore;
use crate::ui::cart::state::CartScreenState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::widgets::{format_bonus, screen_block, scroll_to_selection};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

pub fn render_cart(frame: &mut Frame<'_>, area: Rect, state: &CartScreenState, cart: &CartStore) {
    let block = screen_block("Cart");
    let label = Style::default().fg(MUTED_TEXT);

    if cart.is_empty() {
        let widget = Paragraph::new(Span::styled("Your cart is empty.", label)).block(block);
        frame.render_widget(widget, area);
        return;
    }

    let mut lines = Vec::new();
    let mut selected_line = 0;
    for (idx, line) in cart.lines().iter().enumerate() {
        let mut row = Line::from(vec![
            Span::styled(
                line.item().name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  {} x {} = {}",
                    format_bonus(line.item().price_bonus),
                    line.quantity(),
                    format_bonus(line.subtotal())
                ),
                label,
            ),
        ]);
        if idx == state.selected {
            row = row.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            selected_line = idx + 1;
        }
        lines.push(row);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Total: ", label),
        Span::styled(
            format_bonus(cart.total()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]));
    let checkbox = if state.pay_with_bonus { "[x]" } else { "[ ]" };
    lines.push(Line::from(Span::styled(
        format!("{checkbox} Pay with bonuses (p)"),
        Style::default().fg(HEADER_TEXT),
    )));
    lines.push(Line::from(""));

    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            format!("Error: {error}"),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    let submit = if state.pending {
        Span::styled("Sending...", label)
    } else {
        Span::styled(
            "[ Enter: place order ]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(submit));
    lines.push(Line::from(Span::styled(
        "Up/Down: select  +/-: quantity  d: remove",
        label,
    )));

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll_to_selection(selected_line, area), 0));
    frame.render_widget(widget, area);
}
