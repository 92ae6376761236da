//! App Context

use std::{
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

use storefront::snapshot::ProductSnapshot;

use crate::{
    auth::{IdentityProvider, InMemoryIdentityProvider},
    feed::{InMemoryProductFeed, ProductFeed},
};

/// The external collaborators a storefront talks to.
#[derive(Clone)]
pub struct AppContext {
    pub identity: Arc<dyn IdentityProvider>,
    pub feed: Arc<dyn ProductFeed>,
}

impl AppContext {
    /// Build a context from existing collaborators.
    pub fn new(identity: Arc<dyn IdentityProvider>, feed: Arc<dyn ProductFeed>) -> Self {
        Self { identity, feed }
    }

    /// Build an in-process context seeded with a product snapshot.
    #[must_use]
    pub fn in_memory(snapshot: ProductSnapshot) -> Self {
        Self::new(
            Arc::new(InMemoryIdentityProvider::new()),
            Arc::new(InMemoryProductFeed::new(snapshot)),
        )
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
