//! REST API handlers for shopping cart operations
//!
//! A cart is opened when a menu page is shown and discarded when the user
//! leaves it or completes checkout.

use super::{helpers::*, models::*, state::*};
use crate::backend::models::MenuItem;
use crate::error::{AppError, ValidationError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{debug, info};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/carts", post(open_cart))
        .route("/carts/:cart_id", get(get_cart).delete(discard_cart))
        .route("/carts/:cart_id/items", post(add_item))
        .route(
            "/carts/:cart_id/items/:menu_item_id/decrement",
            post(decrement_item),
        )
        .route("/carts/:cart_id/items/:menu_item_id", delete(remove_item))
}

/// Runs `f` against the session, failing with 404 when it does not exist.
fn with_session<T>(
    state: &AppState,
    cart_id: &str,
    f: impl FnOnce(&mut CartSession) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let mut session = state
        .sessions
        .get_mut(cart_id)
        .ok_or_else(|| AppError::CartNotFound(cart_id.to_string()))?;
    f(&mut session)
}

/// Endpoint: POST /carts
/// Opens an empty cart scoped to one restaurant.
async fn open_cart(
    State(state): State<SharedState>,
    Json(payload): Json<OpenCartInput>,
) -> impl IntoResponse {
    let cart_id = new_cart_id();
    let session = CartSession::new(payload.restaurant_id);
    let view = session.view(&cart_id);

    state.sessions.insert(cart_id.clone(), session);
    info!("Cart {} opened for restaurant {}", cart_id, payload.restaurant_id);

    (StatusCode::CREATED, Json(view))
}

/// Endpoint: GET /carts/:cart_id
async fn get_cart(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
) -> Result<Json<CartView>, AppError> {
    with_session(&state, &cart_id, |session| Ok(Json(session.view(&cart_id))))
}

/// Endpoint: DELETE /carts/:cart_id
/// The user left the menu page; an in-flight submission result is dropped.
async fn discard_cart(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .remove(&cart_id)
        .ok_or_else(|| AppError::CartNotFound(cart_id.clone()))?;
    info!("Cart {} discarded", cart_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Endpoint: POST /carts/:cart_id/items
/// Adds one unit of the posted menu item.
async fn add_item(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
    Json(item): Json<MenuItem>,
) -> Result<Json<CartView>, AppError> {
    with_session(&state, &cart_id, |session| {
        let expected = session.cart.restaurant_id();
        if let Some(found) = item.restaurant_id.filter(|id| *id != expected) {
            return Err(ValidationError::RestaurantMismatch { expected, found }.into());
        }

        session.cart.add_item(&item)?;
        debug!("Cart {}: {}", cart_id, format_item_summary(&session.cart));
        Ok(Json(session.view(&cart_id)))
    })
}

/// Endpoint: POST /carts/:cart_id/items/:menu_item_id/decrement
async fn decrement_item(
    State(state): State<SharedState>,
    Path((cart_id, menu_item_id)): Path<(String, u64)>,
) -> Result<Json<CartView>, AppError> {
    with_session(&state, &cart_id, |session| {
        session.cart.decrement_item(menu_item_id);
        Ok(Json(session.view(&cart_id)))
    })
}

/// Endpoint: DELETE /carts/:cart_id/items/:menu_item_id
async fn remove_item(
    State(state): State<SharedState>,
    Path((cart_id, menu_item_id)): Path<(String, u64)>,
) -> Result<Json<CartView>, AppError> {
    with_session(&state, &cart_id, |session| {
        session.cart.remove_item(menu_item_id);
        Ok(Json(session.view(&cart_id)))
    })
}
