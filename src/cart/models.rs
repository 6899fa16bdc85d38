//! Shopping Cart Domain Models
//!
//! This module contains the cart itself and the request/response shapes of
//! the cart endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::backend::models::{MenuItem, OrderLine};
use crate::checkout::workflow::SubmissionState;
use crate::error::ValidationError;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One selected menu item. Name and price are captured when first added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub menu_item_id: u64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Menu items selected for a single restaurant.
///
/// Holds at most one line per menu item, and never a line with quantity 0.
/// Every price is non-negative and the total always fits in a `Decimal`, so
/// `subtotal` and `total` cannot overflow.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    restaurant_id: u64,
    lines: HashMap<u64, CartLine>,
}

impl Cart {
    pub fn new(restaurant_id: u64) -> Self {
        Self {
            restaurant_id,
            lines: HashMap::new(),
        }
    }

    pub fn restaurant_id(&self) -> u64 {
        self.restaurant_id
    }

    /// Adds one unit of `item`, creating its line on first add.
    ///
    /// Rejects a negative price, and any add that would push the total past
    /// what a `Decimal` can hold. The cart is unchanged on error.
    pub fn add_item(&mut self, item: &MenuItem) -> Result<(), ValidationError> {
        if item.price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice(item.price));
        }

        let unit_price = self
            .lines
            .get(&item.id)
            .map_or(item.price, |line| line.price);
        self.total()
            .checked_add(unit_price)
            .ok_or(ValidationError::TotalOverflow)?;

        self.lines
            .entry(item.id)
            .and_modify(|line| line.quantity += 1)
            .or_insert_with(|| CartLine {
                menu_item_id: item.id,
                name: item.name.clone(),
                price: item.price,
                quantity: 1,
            });
        Ok(())
    }

    /// Removes one unit; the line goes away when its last unit does.
    pub fn decrement_item(&mut self, menu_item_id: u64) {
        let Some(line) = self.lines.get_mut(&menu_item_id) else {
            return;
        };

        if line.quantity <= 1 {
            self.lines.remove(&menu_item_id);
        } else {
            line.quantity -= 1;
        }
    }

    pub fn remove_item(&mut self, menu_item_id: u64) {
        self.lines.remove(&menu_item_id);
    }

    pub fn total(&self) -> Decimal {
        self.lines.values().map(CartLine::subtotal).sum()
    }

    pub fn to_order_lines(&self) -> Vec<OrderLine> {
        self.lines
            .values()
            .map(|line| OrderLine {
                menu_item_id: line.menu_item_id,
                quantity: line.quantity,
            })
            .collect()
    }

    #[cfg(test)]
    pub fn line(&self, menu_item_id: u64) -> Option<&CartLine> {
        self.lines.get(&menu_item_id)
    }

    /// Lines sorted by menu item id, for stable display.
    pub fn lines(&self) -> Vec<&CartLine> {
        let mut lines: Vec<_> = self.lines.values().collect();
        lines.sort_by_key(|line| line.menu_item_id);
        lines
    }

    pub fn item_count(&self) -> u32 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Endpoint Payloads
// =============================================================================

/// Input for opening a cart on a restaurant's menu
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenCartInput {
    pub restaurant_id: u64,
}

/// Snapshot of a cart session returned by every cart endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub cart_id: String,
    pub restaurant_id: u64,
    pub items: Vec<CartLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub item_count: u32,
    pub delivery_address: String,
    pub rating: u8,
    pub submission: SubmissionState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn menu_item(id: u64, name: &str, price: &str) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: String::new(),
            price: Decimal::from_str(price).unwrap(),
            restaurant_id: Some(1),
        }
    }

    fn recomputed_total(cart: &Cart) -> Decimal {
        cart.lines()
            .iter()
            .fold(Decimal::ZERO, |acc, line| {
                acc + line.price * Decimal::from(line.quantity)
            })
    }

    #[test]
    fn total_of_two_lines() {
        let pizza = menu_item(1, "Pizza", "10");
        let soda = menu_item(2, "Soda", "5");
        let mut cart = Cart::new(1);

        cart.add_item(&pizza).unwrap();
        cart.add_item(&pizza).unwrap();
        cart.add_item(&soda).unwrap();

        assert_eq!(cart.total(), Decimal::from(25));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn empty_cart_totals_zero() {
        let cart = Cart::new(1);
        assert_eq!(cart.total(), Decimal::ZERO);
        assert!(cart.to_order_lines().is_empty());
    }

    #[test]
    fn add_keeps_price_captured_on_first_add() {
        let mut cart = Cart::new(1);
        cart.add_item(&menu_item(1, "Pizza", "10")).unwrap();
        cart.add_item(&menu_item(1, "Pizza (new name)", "12")).unwrap();

        let line = cart.line(1).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.name, "Pizza");
        assert_eq!(line.price, Decimal::from(10));
    }

    #[test]
    fn add_then_decrement_restores_previous_cart() {
        let mut cart = Cart::new(1);
        cart.add_item(&menu_item(1, "Pizza", "10")).unwrap();
        let before = cart.clone();

        cart.add_item(&menu_item(1, "Pizza", "10")).unwrap();
        cart.decrement_item(1);
        assert_eq!(cart, before);

        cart.add_item(&menu_item(2, "Soda", "2.5")).unwrap();
        cart.decrement_item(2);
        assert_eq!(cart, before);
        assert!(cart.line(2).is_none());
    }

    #[test]
    fn decrement_and_remove_on_missing_item_are_noops() {
        let mut cart = Cart::new(1);
        cart.add_item(&menu_item(1, "Pizza", "10")).unwrap();
        let before = cart.clone();

        cart.decrement_item(99);
        cart.remove_item(99);
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_drops_line_regardless_of_quantity() {
        let mut cart = Cart::new(1);
        let pizza = menu_item(1, "Pizza", "10");
        for _ in 0..4 {
            cart.add_item(&pizza).unwrap();
        }

        cart.remove_item(1);
        assert!(cart.is_empty());
    }

    #[test]
    fn order_lines_cover_every_line() {
        let mut cart = Cart::new(1);
        cart.add_item(&menu_item(1, "Pizza", "10")).unwrap();
        cart.add_item(&menu_item(1, "Pizza", "10")).unwrap();
        cart.add_item(&menu_item(2, "Soda", "5")).unwrap();

        let mut lines = cart.to_order_lines();
        lines.sort_by_key(|l| l.menu_item_id);
        assert_eq!(
            lines,
            vec![
                OrderLine { menu_item_id: 1, quantity: 2 },
                OrderLine { menu_item_id: 2, quantity: 1 },
            ]
        );
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut cart = Cart::new(1);
        cart.add_item(&menu_item(1, "Pizza", "10")).unwrap();
        let before = cart.clone();

        let err = cart.add_item(&menu_item(2, "Refund", "-10")).unwrap_err();
        assert_eq!(err, ValidationError::NegativePrice(Decimal::from(-10)));
        assert_eq!(cart, before);
        assert_eq!(cart.total(), Decimal::from(10));
    }

    #[test]
    fn free_item_is_accepted() {
        let mut cart = Cart::new(1);
        cart.add_item(&menu_item(1, "Water", "0")).unwrap();
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn add_that_would_overflow_total_is_rejected() {
        let huge = menu_item(1, "Caviar", "10000000000000000000000000000");
        let mut cart = Cart::new(1);
        for _ in 0..7 {
            cart.add_item(&huge).unwrap();
        }
        let before = cart.clone();

        assert_eq!(cart.add_item(&huge), Err(ValidationError::TotalOverflow));
        let other = menu_item(2, "Truffle", "10000000000000000000000000000");
        assert_eq!(cart.add_item(&other), Err(ValidationError::TotalOverflow));
        assert_eq!(cart, before);
        assert_eq!(cart.total(), Decimal::from_str("70000000000000000000000000000").unwrap());
        assert_eq!(cart.line(1).unwrap().quantity, 7);
    }

    #[test]
    fn arbitrary_operation_sequences_keep_invariants() {
        let items = [
            menu_item(1, "Pizza", "10"),
            menu_item(2, "Soda", "2.5"),
            menu_item(3, "Salad", "7.25"),
        ];
        let mut cart = Cart::new(1);

        // Deterministic linear congruential sequence of operations.
        let mut seed: u64 = 42;
        for _ in 0..2_000 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let item = &items[(seed >> 33) as usize % items.len()];
            match (seed >> 20) % 5 {
                0 | 1 => cart.add_item(item).unwrap(),
                2 | 3 => cart.decrement_item(item.id),
                _ => cart.remove_item(item.id),
            }

            assert!(cart.lines().iter().all(|line| line.quantity >= 1));
            assert_eq!(cart.total(), recomputed_total(&cart));
            assert!(cart.total() >= Decimal::ZERO);
        }
    }
}
