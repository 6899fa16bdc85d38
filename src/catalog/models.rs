//! Catalog views returned to the UI.

use serde::{Deserialize, Serialize};

use crate::backend::models::{MenuItem, Restaurant, RestaurantStats};

/// A restaurant card: catalog entry joined with its review statistics.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    #[serde(flatten)]
    pub stats: RestaurantStats,
}

impl RestaurantSummary {
    /// Case-insensitive match on name or cuisine. An empty term matches all.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.restaurant.name.to_lowercase().contains(&term)
            || self.restaurant.cuisine.to_lowercase().contains(&term)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantMenu {
    pub restaurant: Restaurant,
    pub items: Vec<MenuItem>,
}
