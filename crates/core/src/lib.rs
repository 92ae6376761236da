//! Storefront
//!
//! Storefront is the state-management core of a storefront client: the shopper's
//! cart, the filtered and ordered view over a live product feed, and the rules
//! that gate checkout and reviews.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod money;
pub mod prelude;
pub mod products;
pub mod projection;
pub mod reviews;
pub mod snapshot;
pub mod validation;
