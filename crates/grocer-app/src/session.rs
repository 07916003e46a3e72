//! # Cart Session
//!
//! Per-customer, in-progress cart state, kept outside the store actor. A
//! [`CartSession`] stands in for whatever session storage the serving layer
//! uses; the core only ever sees the `(product id, quantity)` pairs handed to
//! it at checkout. Carts are keyed by store, so switching stores never mixes
//! selections.

use std::collections::HashMap;

use crate::model::{OrderLine, ProductId, StoreId};

/// A customer's unconfirmed selection for one store.
///
/// Insertion order is preserved and becomes the order-line order at checkout.
/// Adding the same product twice merges quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<(ProductId, u32)>,
}

impl Cart {
    /// Merges `quantity` units into the cart and returns the new total held
    /// for that product.
    pub fn add(&mut self, product_id: ProductId, quantity: u32) -> u32 {
        match self.lines.iter_mut().find(|(id, _)| *id == product_id) {
            Some((_, held)) => {
                *held = held.saturating_add(quantity);
                *held
            }
            None => {
                self.lines.push((product_id, quantity));
                quantity
            }
        }
    }

    /// Overwrites the quantity held for a product. Setting 0 drops the line.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.lines.retain(|(id, _)| *id != product_id);
            return;
        }
        match self.lines.iter_mut().find(|(id, _)| *id == product_id) {
            Some((_, held)) => *held = quantity,
            None => self.lines.push((product_id, quantity)),
        }
    }

    /// Units currently held for one product.
    pub fn quantity(&self, product_id: ProductId) -> u32 {
        self.lines
            .iter()
            .find(|(id, _)| *id == product_id)
            .map(|(_, q)| *q)
            .unwrap_or(0)
    }

    /// The raw `(product id, quantity)` pairs in insertion order.
    pub fn lines(&self) -> &[(ProductId, u32)] {
        &self.lines
    }

    /// Converts the cart into order lines, skipping empty entries.
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.lines
            .iter()
            .filter(|(_, quantity)| *quantity > 0)
            .map(|(product_id, quantity)| OrderLine::new(*product_id, *quantity))
            .collect()
    }

    /// Total units across all lines (the cart badge).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|(_, quantity)| quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// All of one customer's carts, keyed by store.
#[derive(Debug, Clone, Default)]
pub struct CartSession {
    carts: HashMap<StoreId, Cart>,
}

impl CartSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cart for a store, if the customer has started one.
    pub fn cart(&self, store_id: StoreId) -> Option<&Cart> {
        self.carts.get(&store_id)
    }

    /// The cart for a store, creating an empty one on first use.
    pub fn cart_mut(&mut self, store_id: StoreId) -> &mut Cart {
        self.carts.entry(store_id).or_default()
    }

    /// Empties the cart for one store, leaving other stores' carts alone.
    pub fn clear(&mut self, store_id: StoreId) {
        self.carts.remove(&store_id);
    }

    /// Badge count for one store's cart.
    pub fn item_count(&self, store_id: StoreId) -> u32 {
        self.cart(store_id).map_or(0, Cart::item_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_merges_quantities_in_insertion_order() {
        let mut cart = Cart::default();
        assert_eq!(cart.add(ProductId(2), 3), 3);
        assert_eq!(cart.add(ProductId(1), 1), 1);
        assert_eq!(cart.add(ProductId(2), 2), 5);

        assert_eq!(cart.lines(), &[(ProductId(2), 5), (ProductId(1), 1)]);
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn set_quantity_overwrites_and_zero_drops() {
        let mut cart = Cart::default();
        cart.add(ProductId(1), 8);
        cart.set_quantity(ProductId(1), 3);
        assert_eq!(cart.quantity(ProductId(1)), 3);

        cart.set_quantity(ProductId(1), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn order_lines_skip_empty_entries() {
        let mut cart = Cart::default();
        cart.add(ProductId(1), 2);
        cart.add(ProductId(3), 4);

        let lines = cart.order_lines();
        assert_eq!(
            lines,
            vec![OrderLine::new(ProductId(1), 2), OrderLine::new(ProductId(3), 4)]
        );
    }

    #[test]
    fn carts_are_independent_per_store() {
        let mut session = CartSession::new();
        session.cart_mut(StoreId(1)).add(ProductId(1), 2);
        session.cart_mut(StoreId(2)).add(ProductId(1), 7);

        assert_eq!(session.item_count(StoreId(1)), 2);
        assert_eq!(session.item_count(StoreId(2)), 7);

        session.clear(StoreId(1));
        assert_eq!(session.item_count(StoreId(1)), 0);
        assert_eq!(session.item_count(StoreId(2)), 7);
    }
}
