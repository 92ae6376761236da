//! Product Feed

mod errors;
mod service;

pub use errors::FeedError;
pub use service::*;
