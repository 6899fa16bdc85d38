//! Order Listing Module
//!
//! Status projection of the user's orders and the confirm, cancel and
//! delivery rating actions.

pub mod handlers;
pub mod models;

pub use handlers::routes;
