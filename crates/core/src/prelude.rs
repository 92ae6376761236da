//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartItem},
    catalog::{CatalogError, bundled_catalog, load_catalog, parse_catalog},
    checkout::{CheckoutField, CheckoutForm, OrderConfirmation, OrderLine, ValidationError},
    money::format_price,
    products::{CountryOfOrigin, Product, ProductId},
    projection::{OriginFilter, SortOption, ViewParams, project},
    reviews::{NewReview, Rating, Review, ReviewAuthor, ReviewError, ReviewSnapshot, ReviewSummary},
    snapshot::{ProductLookup, ProductSnapshot},
};
