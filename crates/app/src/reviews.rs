//! Review errors.

use storefront::{products::ProductId, reviews::ReviewError};
use thiserror::Error;

use crate::{feed::FeedError, session::SessionError};

/// Reasons a review could not be read or submitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error(transparent)]
    Invalid(#[from] ReviewError),

    #[error(transparent)]
    Feed(#[from] FeedError),
}
