//! Application State
//!
//! Cart sessions plus the configured backend client.

use super::models::{Cart, CartView};
use crate::backend::BackendClient;
use crate::checkout::workflow::Checkout;
use crate::config::Config;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::info;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// One open menu page: the cart and what was entered on the checkout page.
#[derive(Debug, Clone)]
pub struct CartSession {
    pub cart: Cart,
    pub checkout: Checkout,
}

impl CartSession {
    pub fn new(restaurant_id: u64) -> Self {
        Self {
            cart: Cart::new(restaurant_id),
            checkout: Checkout::default(),
        }
    }

    pub fn view(&self, cart_id: &str) -> CartView {
        CartView {
            cart_id: cart_id.to_string(),
            restaurant_id: self.cart.restaurant_id(),
            items: self.cart.lines().into_iter().cloned().collect(),
            total: self.cart.total(),
            item_count: self.cart.item_count(),
            delivery_address: self.checkout.delivery_address().to_string(),
            rating: self.checkout.rating(),
            submission: self.checkout.state(),
        }
    }
}

/// Core application state
pub struct AppState {
    /// Open cart sessions, keyed by cart id.
    /// Entries are never held across a backend call.
    pub sessions: DashMap<String, CartSession>,

    pub backend: BackendClient,

    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        info!(
            "Using backends {} and {}",
            config.api_base_url, config.delivery_api_base_url
        );

        Self {
            sessions: DashMap::new(),
            backend: BackendClient::new(&config),
            config,
        }
    }
}
