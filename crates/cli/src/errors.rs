//! CLI Errors

use std::io;

use storefront::{catalog::CatalogError, products::ProductId};
use storefront_app::{
    auth::AuthError, checkout::CheckoutError, reviews::ReviewServiceError, session::SessionError,
};
use thiserror::Error;

/// Errors reported by a storefront command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Review(#[from] ReviewServiceError),

    /// Asked to add a product the catalog doesn't have.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
