//! Checkout

use jiff::Timestamp;
use storefront::{
    cart::Cart,
    checkout::{CheckoutForm, OrderConfirmation, ValidationError},
};
use thiserror::Error;
use tracing::{info, warn};

use crate::session::SessionError;

/// Reasons an order was not placed. The cart is untouched in every case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Your cart is empty. Add items before checking out.")]
    EmptyCart,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Validate the form, summarise the cart and clear it.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] for an empty cart, or
/// [`CheckoutError::Invalid`] naming the first invalid form field.
pub fn place_order(
    cart: &mut Cart,
    form: &CheckoutForm,
    placed_at: Timestamp,
) -> Result<OrderConfirmation, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    if let Err(error) = form.validate() {
        warn!(field = %error.field, "checkout form rejected");

        return Err(error.into());
    }

    let confirmation = OrderConfirmation::from_cart(cart, placed_at);

    cart.clear_cart();

    info!(
        items = confirmation.item_count,
        total = %confirmation.total,
        "order placed"
    );

    Ok(confirmation)
}
