//! Catalog Module
//!
//! Restaurant listing with ratings and search, restaurant detail and menus.

pub mod handlers;
pub mod models;

pub use handlers::routes;
