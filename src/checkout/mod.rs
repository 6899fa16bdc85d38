//! Checkout Module
//!
//! Turns a cart into an order:
//! - The submission state machine and the order draft
//! - The order-then-review saga against the backend
//! - REST API handlers for the checkout page

pub mod handlers;
pub mod saga;
pub mod workflow;

pub use handlers::routes;
