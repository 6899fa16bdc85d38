//! Backend Wire Models
//!
//! JSON shapes exchanged with the restaurant, menu, order, review and
//! delivery services. Field names follow the services' camelCase contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog
// =============================================================================

/// Collection envelope used by the catalog services (`_embedded.<name>`).
#[derive(Debug, Deserialize)]
pub struct Embedded<T> {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RestaurantList {
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemList {
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Aggregate review figures for one restaurant.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantStats {
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u64,
}

/// A dish offered by a restaurant. Read-only on this side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub restaurant_id: Option<u64>,
}

// =============================================================================
// Orders
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub menu_item_id: u64,
    pub quantity: u32,
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: u64,
    pub restaurant_id: u64,
    pub delivery_address: String,
    pub order_items: Vec<OrderLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub menu_item_name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub status: OrderStatus,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_price: Option<Decimal>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

// =============================================================================
// Reviews
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewType {
    Restaurant,
}

/// Body of `POST /reviews`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub entity_id: u64,
    #[serde(rename = "type")]
    pub review_type: ReviewType,
    pub user_id: u64,
    pub rating: u8,
    pub comment: String,
    pub moderated: bool,
}

// =============================================================================
// Deliveries
// =============================================================================

/// Body of `POST /deliveries/create-for-order`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryForOrderRequest {
    pub order_id: u64,
    pub delivery_address: String,
}

/// Body of `POST /deliveries/{id}/rate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateDeliveryRequest {
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub id: u64,
    #[serde(default)]
    pub order_id: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub driver_id: Option<u64>,
    #[serde(default)]
    pub estimated_time: Option<u32>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub comment: Option<String>,
}
