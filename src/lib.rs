//! Food Ordering Library
//!
//! This library backs a food-delivery ordering UI: restaurant browsing, a
//! per-restaurant cart, order submission and order tracking. Pricing, order
//! lifecycle, delivery assignment and reviews belong to remote services
//! reached over HTTP.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;

// Infrastructure
pub mod backend;
pub mod config;
pub mod error;
pub mod router;
