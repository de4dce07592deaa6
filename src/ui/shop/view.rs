use crate::api::ShopItem;
use crate::cart::CartStore;
use crate::ui::shop::state::ShopState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT};
use crate::ui::widgets::{fetch_placeholder, format_bonus, screen_block, scroll_to_selection};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

/// "120 pts" or "120 pts + 99.50 ₽" when the item also has a money price.
pub fn format_price(item: &ShopItem) -> String {
    match item.price_money {
        Some(money) => format!("{} + {money:.2} ₽", format_bonus(item.price_bonus)),
        None => format_bonus(item.price_bonus),
    }
}

pub fn render_shop(frame: &mut Frame<'_>, area: Rect, state: &ShopState, cart: &CartStore) {
    let block = screen_block("Shop");
    if let Some(placeholder) = fetch_placeholder(&state.catalog, block.clone(), "Loading shop...")
    {
        frame.render_widget(placeholder, area);
        return;
    }
    let items = state.catalog.data().map(Vec::as_slice).unwrap_or_default();
    let label = Style::default().fg(MUTED_TEXT);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("Items: {}", items.len()), label),
            Span::styled("   Cart: ", label),
            Span::styled(
                format_bonus(cart.total()),
                Style::default().fg(ACCENT),
            ),
        ]),
        Line::from(""),
    ];

    let mut selected_line = 0;
    for (idx, item) in items.iter().enumerate() {
        let in_cart = cart.quantity_of(item.id);
        let mut title = vec![
            Span::styled(
                item.name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format_price(item), Style::default().fg(ACCENT)),
        ];
        if in_cart > 0 {
            title.push(Span::styled(format!("  (in cart: {in_cart})"), label));
        }
        let mut entry = vec![Line::from(title)];
        if let Some(category) = &item.category {
            entry.push(Line::from(Span::styled(format!("  [{category}]"), label)));
        }
        if let Some(description) = item.description.as_deref().filter(|d| !d.is_empty()) {
            entry.push(Line::from(Span::styled(format!("  {description}"), label)));
        }
        if idx == state.selected {
            selected_line = lines.len() + entry.len();
            let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
            entry = entry.into_iter().map(|line| line.style(highlight)).collect();
        }
        lines.extend(entry);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down: select  Enter/a: add to cart  6: open cart",
        label,
    )));

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll_to_selection(selected_line, area), 0));
    frame.render_widget(widget, area);
}
