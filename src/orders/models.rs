//! Order listing projections and action payloads.

use serde::{Deserialize, Serialize};

use crate::backend::models::{Delivery, Order, OrderStatus};
use crate::checkout::workflow::MAX_RATING;
use crate::error::ValidationError;

/// Orders split into the three sections of the listing.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct OrderGroups {
    pub pending: Vec<Order>,
    pub confirmed: Vec<Order>,
    pub cancelled: Vec<Order>,
}

impl OrderGroups {
    /// Keeps the backend's order within each group.
    pub fn partition(orders: Vec<Order>) -> Self {
        let mut groups = Self::default();
        for order in orders {
            match order.status {
                OrderStatus::Pending => groups.pending.push(order),
                OrderStatus::Confirmed => groups.confirmed.push(order),
                OrderStatus::Cancelled => groups.cancelled.push(order),
            }
        }
        groups
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmOrderInput {
    /// Taken from the listed order; looked up on the backend when absent
    /// or blank.
    #[serde(default)]
    pub delivery_address: Option<String>,
}

/// Result of confirming an order: the new delivery to rate, and the
/// reloaded listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmedOrder {
    pub delivery: Delivery,
    pub orders: OrderGroups,
}

#[derive(Debug, Default, Deserialize)]
pub struct RateDeliveryInput {
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl RateDeliveryInput {
    /// A delivery rating is mandatory, unlike the restaurant rating.
    pub fn validated_rating(&self) -> Result<u8, ValidationError> {
        match self.rating {
            None | Some(0) => Err(ValidationError::MissingRating),
            Some(rating) if rating > MAX_RATING => Err(ValidationError::RatingOutOfRange(rating)),
            Some(rating) => Ok(rating),
        }
    }
}
