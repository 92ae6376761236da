//! Product feed errors.

use thiserror::Error;

/// The realtime feed failed; the message comes from the feed service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("{0}")]
    Unavailable(String),

    #[error("review rejected: {0}")]
    Rejected(String),
}
