//! Storefront App
//!
//! Session lifecycle, checkout and reviews on top of the storefront core,
//! wired to an identity provider and a realtime product feed.

pub mod auth;
pub mod checkout;
pub mod context;
pub mod feed;
pub mod reviews;
pub mod session;
pub mod storefront;
