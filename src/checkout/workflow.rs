//! Order submission state machine.
//!
//! `Idle -> Submitting -> Succeeded`, or `Submitting -> Failed -> Idle`.
//! The machine itself performs no I/O; the saga runs between `begin` and
//! `finish`.

use serde::Serialize;
use thiserror::Error;

use crate::backend::models::{CreateOrderRequest, CreateReviewRequest, OrderLine, ReviewType};
use crate::cart::models::Cart;
use crate::error::ValidationError;

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BeginError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("A submission is already in progress")]
    InProgress,
}

/// Payload assembled from a cart at confirm time. Not retained afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub restaurant_id: u64,
    pub delivery_address: String,
    pub lines: Vec<OrderLine>,
    /// 0 means no rating was given.
    pub rating: u8,
}

impl OrderDraft {
    pub fn order_request(&self, user_id: u64) -> CreateOrderRequest {
        CreateOrderRequest {
            user_id,
            restaurant_id: self.restaurant_id,
            delivery_address: self.delivery_address.clone(),
            order_items: self.lines.clone(),
        }
    }

    /// The restaurant review to post once the order exists, if a rating was given.
    pub fn review_request(&self, user_id: u64) -> Option<CreateReviewRequest> {
        (self.rating > 0).then(|| CreateReviewRequest {
            entity_id: self.restaurant_id,
            review_type: ReviewType::Restaurant,
            user_id,
            rating: self.rating,
            comment: String::new(),
            moderated: true,
        })
    }
}

/// Rejects ratings above the five-star scale. 0 is "no rating".
pub fn validate_optional_rating(rating: u8) -> Result<u8, ValidationError> {
    if rating > MAX_RATING {
        return Err(ValidationError::RatingOutOfRange(rating));
    }
    Ok(rating)
}

/// Checkout details entered on the confirmation page plus the submission state.
#[derive(Debug, Clone, Default)]
pub struct Checkout {
    delivery_address: String,
    rating: u8,
    state: SubmissionState,
}

impl Checkout {
    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Records the entered address and/or rating. Fields left `None` keep
    /// their previous value.
    pub fn set_details(
        &mut self,
        delivery_address: Option<String>,
        rating: Option<u8>,
    ) -> Result<(), ValidationError> {
        if let Some(rating) = rating {
            self.rating = validate_optional_rating(rating)?;
        }
        if let Some(address) = delivery_address {
            self.delivery_address = address;
        }
        Ok(())
    }

    /// Guards the `Idle -> Submitting` transition and snapshots the cart.
    ///
    /// On error the state is left untouched.
    pub fn begin(&mut self, cart: &Cart) -> Result<OrderDraft, BeginError> {
        if self.state == SubmissionState::Submitting {
            return Err(BeginError::InProgress);
        }

        let address = self.delivery_address.trim();
        if address.is_empty() {
            return Err(ValidationError::MissingAddress.into());
        }
        if cart.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }

        let draft = OrderDraft {
            restaurant_id: cart.restaurant_id(),
            delivery_address: address.to_string(),
            lines: cart.to_order_lines(),
            rating: self.rating,
        };

        self.state = SubmissionState::Submitting;
        Ok(draft)
    }

    /// Leaves `Submitting` and returns the terminal state reached.
    ///
    /// A failure passes through `Failed` and settles back on `Idle` with the
    /// entered details kept, so the user can retry.
    pub fn finish<T, E>(&mut self, outcome: &Result<T, E>) -> SubmissionState {
        match outcome {
            Ok(_) => {
                self.state = SubmissionState::Succeeded;
                SubmissionState::Succeeded
            }
            Err(_) => {
                self.state = SubmissionState::Idle;
                SubmissionState::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::models::MenuItem;
    use rust_decimal::Decimal;

    fn cart_with_pizza() -> Cart {
        let mut cart = Cart::new(4);
        cart.add_item(&MenuItem {
            id: 1,
            name: "Pizza".into(),
            description: String::new(),
            price: Decimal::from(10),
            restaurant_id: Some(4),
        })
        .unwrap();
        cart
    }

    #[test]
    fn empty_address_keeps_idle() {
        let cart = cart_with_pizza();
        let mut checkout = Checkout::default();

        let result = checkout.begin(&cart);
        assert_eq!(result, Err(BeginError::Invalid(ValidationError::MissingAddress)));
        assert_eq!(checkout.state(), SubmissionState::Idle);

        checkout.set_details(Some("   ".into()), None).unwrap();
        assert!(checkout.begin(&cart).is_err());
        assert_eq!(checkout.state(), SubmissionState::Idle);
    }

    #[test]
    fn empty_cart_cannot_be_submitted() {
        let mut checkout = Checkout::default();
        checkout.set_details(Some("1 Main St".into()), None).unwrap();

        let result = checkout.begin(&Cart::new(4));
        assert_eq!(result, Err(BeginError::Invalid(ValidationError::EmptyCart)));
    }

    #[test]
    fn begin_snapshots_the_cart() {
        let cart = cart_with_pizza();
        let mut checkout = Checkout::default();
        checkout.set_details(Some(" 1 Main St ".into()), Some(4)).unwrap();

        let draft = checkout.begin(&cart).unwrap();
        assert_eq!(checkout.state(), SubmissionState::Submitting);
        assert_eq!(draft.restaurant_id, 4);
        assert_eq!(draft.delivery_address, "1 Main St");
        assert_eq!(draft.lines, vec![OrderLine { menu_item_id: 1, quantity: 1 }]);
        assert_eq!(draft.rating, 4);
    }

    #[test]
    fn second_begin_while_submitting_is_rejected() {
        let cart = cart_with_pizza();
        let mut checkout = Checkout::default();
        checkout.set_details(Some("1 Main St".into()), None).unwrap();

        checkout.begin(&cart).unwrap();
        assert_eq!(checkout.begin(&cart), Err(BeginError::InProgress));
    }

    #[test]
    fn failure_returns_to_idle_and_keeps_details() {
        let cart = cart_with_pizza();
        let mut checkout = Checkout::default();
        checkout.set_details(Some("1 Main St".into()), Some(3)).unwrap();
        checkout.begin(&cart).unwrap();

        let reached = checkout.finish::<(), _>(&Err("boom"));
        assert_eq!(reached, SubmissionState::Failed);
        assert_eq!(checkout.state(), SubmissionState::Idle);
        assert_eq!(checkout.delivery_address(), "1 Main St");
        assert_eq!(checkout.rating(), 3);
    }

    #[test]
    fn success_is_terminal() {
        let cart = cart_with_pizza();
        let mut checkout = Checkout::default();
        checkout.set_details(Some("1 Main St".into()), None).unwrap();
        checkout.begin(&cart).unwrap();

        let reached = checkout.finish::<(), &str>(&Ok(()));
        assert_eq!(reached, SubmissionState::Succeeded);
        assert_eq!(checkout.state(), SubmissionState::Succeeded);
    }

    #[test]
    fn rating_above_five_is_rejected_and_previous_kept() {
        let mut checkout = Checkout::default();
        checkout.set_details(None, Some(2)).unwrap();

        let err = checkout.set_details(Some("ignored".into()), Some(6)).unwrap_err();
        assert_eq!(err, ValidationError::RatingOutOfRange(6));
        assert_eq!(checkout.rating(), 2);
        assert_eq!(checkout.delivery_address(), "");
    }

    #[test]
    fn review_is_only_built_for_a_given_rating() {
        let mut draft = OrderDraft {
            restaurant_id: 4,
            delivery_address: "1 Main St".into(),
            lines: vec![],
            rating: 0,
        };
        assert!(draft.review_request(1).is_none());

        draft.rating = 5;
        let review = draft.review_request(9).unwrap();
        assert_eq!(review.entity_id, 4);
        assert_eq!(review.user_id, 9);
        assert_eq!(review.review_type, ReviewType::Restaurant);
        assert!(review.moderated);
    }
}
