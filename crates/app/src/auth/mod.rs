//! Authentication
//!
//! Sessions are owned by an external identity provider; this module holds the
//! seam to it plus the client-side form checks that run before any call.

mod errors;
mod models;
mod service;

pub use errors::*;
pub use models::*;
pub use service::*;
