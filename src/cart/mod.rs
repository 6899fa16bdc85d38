//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart logic, including:
//! - Domain models (Cart, CartLine, endpoint payloads)
//! - Helpers (cart ids, formatting)
//! - Application state (cart sessions, backend client)
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::Cart;
pub use state::{AppState, SharedState};
