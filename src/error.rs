//! Error taxonomy shared by every handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Rejected locally; no backend request is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("A delivery address is required")]
    MissingAddress,

    #[error("A rating is required")]
    MissingRating,

    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),

    #[error("The cart is empty")]
    EmptyCart,

    #[error("Price must not be negative, got {0}")]
    NegativePrice(Decimal),

    #[error("The cart total would exceed the supported range")]
    TotalOverflow,

    #[error("Menu item belongs to restaurant {found}, cart is for restaurant {expected}")]
    RestaurantMismatch { expected: u64, found: u64 },
}

/// A backend call that did not complete successfully.
#[derive(Debug, Error)]
pub enum RequestFailure {
    #[error("Backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Order {order_id} was created but the review could not be saved: {source}")]
    ReviewAfterOrder {
        order_id: u64,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestFailure),

    #[error("Cart {0} not found")]
    CartNotFound(String),

    #[error("An order is already being submitted for cart {0}")]
    SubmissionInProgress(String),

    #[error("Submission for cart {0} was aborted")]
    SubmissionAborted(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Request(RequestFailure::Http(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Request(_) => StatusCode::BAD_GATEWAY,
            AppError::CartNotFound(_) => StatusCode::NOT_FOUND,
            AppError::SubmissionInProgress(_) => StatusCode::CONFLICT,
            AppError::SubmissionAborted(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if let AppError::Request(failure) = &self {
            warn!("{failure}");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
