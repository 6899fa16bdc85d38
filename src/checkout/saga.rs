//! The two-step submission: create the order, then post the restaurant
//! review when a rating was given. Nothing is compensated or retried.

use tracing::{info, warn};

use super::workflow::OrderDraft;
use crate::backend::{models::Order, BackendClient};
use crate::error::RequestFailure;

#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub order: Order,
    pub review_submitted: bool,
}

pub async fn submit_order(
    client: &BackendClient,
    draft: &OrderDraft,
    user_id: u64,
) -> Result<SubmissionReceipt, RequestFailure> {
    let order = client.create_order(&draft.order_request(user_id)).await?;
    info!(
        "Order {} created for restaurant {}",
        order.id, draft.restaurant_id
    );

    let Some(review) = draft.review_request(user_id) else {
        return Ok(SubmissionReceipt {
            order,
            review_submitted: false,
        });
    };

    if let Err(source) = client.create_review(&review).await {
        warn!("Review for order {} failed: {source}", order.id);
        return Err(RequestFailure::ReviewAfterOrder {
            order_id: order.id,
            source,
        });
    }

    Ok(SubmissionReceipt {
        order,
        review_submitted: true,
    })
}
