//! Session cart: the items the user intends to buy from the bonus shop.
//!
//! Invariants held after every operation:
//! - at most one line per item id;
//! - every line has a quantity of at least 1.
//!
//! The total is always derived from the lines, never stored.

use crate::api::{ItemId, OrderLine, OrderRequest, ShopItem};

/// One item in the cart with its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    item: ShopItem,
    quantity: u32,
}

impl CartLine {
    pub fn item(&self) -> &ShopItem {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Bonus price of this line (unit price times quantity).
    pub fn subtotal(&self) -> u64 {
        self.item.price_bonus * u64::from(self.quantity)
    }
}

/// Cart owned by the current session. Lines keep the order in which each
/// item was first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the line for `item` by one, or appends a new line with
    /// quantity 1.
    pub fn add(&mut self, item: ShopItem) {
        match self.position(item.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
            }
            None => self.lines.push(CartLine { item, quantity: 1 }),
        }
    }

    /// Drops the line for `item_id`. Unknown ids are ignored.
    pub fn remove(&mut self, item_id: ItemId) {
        self.lines.retain(|line| line.item.id != item_id);
    }

    /// Sets the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line. Ids without a line are
    /// left alone: only [`CartStore::add`] creates lines.
    pub fn set_quantity(&mut self, item_id: ItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove(item_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(index) = self.position(item_id) {
            self.lines[index].quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Bonus total over all lines, recomputed on every call.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item.id == item_id)
    }

    pub fn quantity_of(&self, item_id: ItemId) -> u32 {
        self.line(item_id).map_or(0, CartLine::quantity)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Order payload for the current lines, in cart order.
    pub fn order_request(&self, pay_with_bonus: bool) -> OrderRequest {
        OrderRequest {
            items: self
                .lines
                .iter()
                .map(|line| OrderLine {
                    item_id: line.item.id,
                    quantity: line.quantity,
                })
                .collect(),
            pay_with_bonus,
        }
    }

    fn position(&self, item_id: ItemId) -> Option<usize> {
        self.lines.iter().position(|line| line.item.id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn item(id: i64, price: u64) -> ShopItem {
        ShopItem {
            id: ItemId::new(id),
            name: format!("Item {id}"),
            description: None,
            image_url: None,
            price_bonus: price,
            price_money: None,
            category: None,
        }
    }

    fn assert_invariants(cart: &CartStore) {
        let mut seen = HashSet::new();
        for line in cart.lines() {
            assert!(seen.insert(line.item().id), "duplicate line for {}", line.item().id);
            assert!(line.quantity() > 0, "non-positive quantity for {}", line.item().id);
        }
    }

    fn contents(cart: &CartStore) -> Vec<(i64, u32)> {
        cart.lines()
            .iter()
            .map(|line| (line.item().id.get(), line.quantity()))
            .collect()
    }

    #[test]
    fn add_on_empty_cart_creates_single_line() {
        let mut cart = CartStore::new();
        cart.add(item(1, 10));
        assert_eq!(contents(&cart), vec![(1, 1)]);
    }

    #[test]
    fn add_twice_increments_instead_of_duplicating() {
        let mut cart = CartStore::new();
        cart.add(item(1, 10));
        cart.add(item(1, 10));
        assert_eq!(contents(&cart), vec![(1, 2)]);
        assert_invariants(&cart);
    }

    #[test]
    fn add_appends_new_items_after_existing_lines() {
        let mut cart = CartStore::new();
        cart.add(item(3, 1));
        cart.add(item(1, 1));
        cart.add(item(3, 1));
        assert_eq!(contents(&cart), vec![(3, 2), (1, 1)]);
    }

    #[test]
    fn set_quantity_zero_and_negative_match_remove() {
        let mut base = CartStore::new();
        base.add(item(1, 10));
        base.add(item(2, 5));

        let mut removed = base.clone();
        removed.remove(ItemId::new(1));

        let mut zero = base.clone();
        zero.set_quantity(ItemId::new(1), 0);

        let mut negative = base.clone();
        negative.set_quantity(ItemId::new(1), -5);

        assert_eq!(zero, removed);
        assert_eq!(negative, removed);
        assert_eq!(contents(&removed), vec![(2, 1)]);
    }

    #[test]
    fn set_quantity_keeps_line_position() {
        let mut cart = CartStore::new();
        cart.add(item(1, 10));
        cart.add(item(2, 5));
        cart.add(item(3, 1));
        cart.set_quantity(ItemId::new(2), 7);
        assert_eq!(contents(&cart), vec![(1, 1), (2, 7), (3, 1)]);
    }

    #[test]
    fn set_quantity_on_absent_id_does_not_create_line() {
        let mut cart = CartStore::new();
        cart.add(item(1, 10));
        let before = cart.clone();
        cart.set_quantity(ItemId::new(42), 3);
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_of_unknown_id_is_noop() {
        let mut cart = CartStore::new();
        cart.add(item(1, 10));
        let before = cart.clone();
        cart.remove(ItemId::new(99));
        assert_eq!(cart, before);
    }

    #[test]
    fn total_of_empty_cart_is_zero() {
        assert_eq!(CartStore::new().total(), 0);
    }

    #[test]
    fn checkout_scenario() {
        let a = item(1, 10);
        let b = item(2, 5);
        let mut cart = CartStore::new();

        cart.add(a.clone());
        cart.add(b);
        cart.add(a);
        assert_eq!(contents(&cart), vec![(1, 2), (2, 1)]);
        assert_eq!(cart.total(), 25);
        assert_eq!(cart.item_count(), 3);

        cart.set_quantity(ItemId::new(1), 0);
        assert_eq!(contents(&cart), vec![(2, 1)]);
        assert_eq!(cart.total(), 5);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn invariants_hold_over_mixed_operation_sequence() {
        let mut cart = CartStore::new();
        let ops: [(u8, i64, i64); 14] = [
            (0, 1, 0),
            (0, 2, 0),
            (0, 1, 0),
            (2, 2, 4),
            (2, 3, 2),
            (1, 9, 0),
            (2, 1, -1),
            (0, 3, 0),
            (0, 1, 0),
            (2, 3, 0),
            (0, 2, 0),
            (1, 2, 0),
            (2, 1, 12),
            (0, 4, 0),
        ];
        for (op, id, quantity) in ops {
            match op {
                0 => cart.add(item(id, 3)),
                1 => cart.remove(ItemId::new(id)),
                _ => cart.set_quantity(ItemId::new(id), quantity),
            }
            assert_invariants(&cart);
        }
        assert_eq!(contents(&cart), vec![(1, 12), (4, 1)]);
        assert_eq!(cart.total(), 39);
    }

    #[test]
    fn order_request_follows_cart_order() {
        let mut cart = CartStore::new();
        cart.add(item(8, 1));
        cart.add(item(2, 1));
        cart.set_quantity(ItemId::new(8), 3);

        let request = cart.order_request(false);
        assert!(!request.pay_with_bonus);
        assert_eq!(
            request.items,
            vec![
                OrderLine {
                    item_id: ItemId::new(8),
                    quantity: 3
                },
                OrderLine {
                    item_id: ItemId::new(2),
                    quantity: 1
                },
            ]
        );
    }
}
