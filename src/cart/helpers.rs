//! Shopping Cart Helpers
//!
//! This module contains helper functions for cart identifiers and formatting.

use super::models::Cart;
use uuid::Uuid;

/// Creates a fresh identifier for a cart session.
pub fn new_cart_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Produces a human-readable one-line summary of a cart.
///
/// Example output: `"2x Pizza, 1x Soda"`.
pub fn format_item_summary(cart: &Cart) -> String {
    cart.lines()
        .iter()
        .map(|line| format!("{}x {}", line.quantity, line.name))
        .collect::<Vec<_>>()
        .join(", ")
}
