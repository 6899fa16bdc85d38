//! REST API handlers for the checkout page

use super::saga::submit_order;
use super::workflow::{BeginError, SubmissionState};
use crate::cart::helpers::format_item_summary;
use crate::cart::models::CartView;
use crate::cart::state::{AppState, SharedState};
use crate::error::AppError;
use axum::{
    extract::{Path, State},
    routing::put,
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Where the UI goes after a successful checkout.
pub const ORDERS_VIEW: &str = "/orders";

/// Creates routes for checkout operations
pub fn routes() -> Router<SharedState> {
    Router::new().route(
        "/carts/:cart_id/checkout",
        put(update_details).post(confirm_order),
    )
}

/// Address and rating as typed on the checkout page
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
}

/// Response for a successful checkout
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub cart_id: String,
    pub order_id: u64,
    pub submission: SubmissionState,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub review_submitted: bool,
    /// The cart is gone; the UI should navigate here.
    pub redirect: String,
    /// The listing must be reloaded from the backend.
    pub refresh_orders: bool,
}

/// Endpoint: PUT /carts/:cart_id/checkout
/// Stores the entered address and rating without submitting.
async fn update_details(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
    Json(input): Json<CheckoutInput>,
) -> Result<Json<CartView>, AppError> {
    let mut session = state
        .sessions
        .get_mut(&cart_id)
        .ok_or_else(|| AppError::CartNotFound(cart_id.clone()))?;

    session
        .checkout
        .set_details(input.delivery_address, input.rating)?;
    Ok(Json(session.view(&cart_id)))
}

/// Leaves `Submitting` for the session, if the user has not discarded it.
/// A successful submission discards the cart.
fn settle<T, E>(state: &AppState, cart_id: &str, outcome: &Result<T, E>) {
    match state.sessions.get_mut(cart_id) {
        Some(mut session) => {
            let reached = session.checkout.finish(outcome);
            info!("Cart {} submission {:?}", cart_id, reached);
        }
        None => {
            warn!("Cart {} was discarded during submission", cart_id);
            return;
        }
    }

    if outcome.is_ok() {
        state.sessions.remove(cart_id);
    }
}

/// Endpoint: POST /carts/:cart_id/checkout
/// Submits the order, then the restaurant review if one was given.
async fn confirm_order(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
    Json(input): Json<CheckoutInput>,
) -> Result<Json<CheckoutReceipt>, AppError> {
    let (draft, total) = {
        let mut guard = state
            .sessions
            .get_mut(&cart_id)
            .ok_or_else(|| AppError::CartNotFound(cart_id.clone()))?;
        let session = &mut *guard;

        session
            .checkout
            .set_details(input.delivery_address, input.rating)?;

        let draft = session.checkout.begin(&session.cart).map_err(|e| match e {
            BeginError::Invalid(invalid) => AppError::Validation(invalid),
            BeginError::InProgress => AppError::SubmissionInProgress(cart_id.clone()),
        })?;

        info!(
            "Submitting cart {}: {}",
            cart_id,
            format_item_summary(&session.cart)
        );
        (draft, session.cart.total())
    };

    // The submission runs on its own task so that it always settles the
    // session, even when the caller stops waiting.
    let task_state = state.clone();
    let task_cart_id = cart_id.clone();
    let submission = tokio::spawn(async move {
        let outcome = submit_order(&task_state.backend, &draft, task_state.config.user_id).await;
        settle(&task_state, &task_cart_id, &outcome);
        outcome
    });

    let receipt = match submission.await {
        Ok(outcome) => outcome?,
        Err(e) => {
            error!("Submission task for cart {} failed: {}", cart_id, e);
            settle::<(), ()>(&state, &cart_id, &Err(()));
            return Err(AppError::SubmissionAborted(cart_id));
        }
    };

    Ok(Json(CheckoutReceipt {
        cart_id,
        order_id: receipt.order.id,
        submission: SubmissionState::Succeeded,
        total,
        review_submitted: receipt.review_submitted,
        redirect: ORDERS_VIEW.to_string(),
        refresh_orders: true,
    }))
}
