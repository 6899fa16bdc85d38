//! REST API handlers for the order listing
//!
//! Every action reloads the full listing from the backend afterwards.

use super::models::*;
use crate::backend::models::{DeliveryForOrderRequest, OrderStatus, RateDeliveryRequest};
use crate::cart::state::{AppState, SharedState};
use crate::error::{AppError, ValidationError};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::info;

/// Creates routes for order listing operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/orders/:order_id/confirm", post(confirm_order))
        .route("/orders/:order_id/cancel", post(cancel_order))
        .route("/deliveries/:delivery_id/rate", post(rate_delivery))
}

async fn load_groups(state: &AppState) -> Result<OrderGroups, AppError> {
    let orders = state.backend.list_orders().await?;
    Ok(OrderGroups::partition(orders))
}

fn non_blank(address: Option<String>) -> Option<String> {
    address.filter(|a| !a.trim().is_empty())
}

/// Endpoint: GET /orders
async fn list_orders(State(state): State<SharedState>) -> Result<Json<OrderGroups>, AppError> {
    Ok(Json(load_groups(&state).await?))
}

/// Endpoint: POST /orders/:order_id/confirm
/// Confirms the order and requests a delivery for it. Nothing is sent when
/// no delivery address can be found.
async fn confirm_order(
    State(state): State<SharedState>,
    Path(order_id): Path<u64>,
    Json(input): Json<ConfirmOrderInput>,
) -> Result<Json<ConfirmedOrder>, AppError> {
    let delivery_address = match non_blank(input.delivery_address) {
        Some(address) => address,
        None => state
            .backend
            .list_orders()
            .await?
            .into_iter()
            .find(|order| order.id == order_id)
            .and_then(|order| non_blank(order.delivery_address))
            .ok_or(ValidationError::MissingAddress)?,
    };

    state
        .backend
        .update_order_status(order_id, OrderStatus::Confirmed)
        .await?;

    let delivery = state
        .backend
        .create_delivery_for_order(&DeliveryForOrderRequest {
            order_id,
            delivery_address,
        })
        .await?;
    info!("Order {} confirmed, delivery {} created", order_id, delivery.id);

    Ok(Json(ConfirmedOrder {
        delivery,
        orders: load_groups(&state).await?,
    }))
}

/// Endpoint: POST /orders/:order_id/cancel
async fn cancel_order(
    State(state): State<SharedState>,
    Path(order_id): Path<u64>,
) -> Result<Json<OrderGroups>, AppError> {
    state
        .backend
        .update_order_status(order_id, OrderStatus::Cancelled)
        .await?;
    info!("Order {} cancelled", order_id);

    Ok(Json(load_groups(&state).await?))
}

/// Endpoint: POST /deliveries/:delivery_id/rate
async fn rate_delivery(
    State(state): State<SharedState>,
    Path(delivery_id): Path<u64>,
    Json(input): Json<RateDeliveryInput>,
) -> Result<Json<OrderGroups>, AppError> {
    let rating = input.validated_rating()?;

    state
        .backend
        .rate_delivery(
            delivery_id,
            &RateDeliveryRequest {
                rating,
                comment: input.comment.unwrap_or_default(),
            },
        )
        .await?;
    info!("Delivery {} rated {}", delivery_id, rating);

    Ok(Json(load_groups(&state).await?))
}
