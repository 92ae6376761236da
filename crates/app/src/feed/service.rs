//! Product feed service.

use std::fmt::{self, Debug, Formatter};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use storefront::{
    products::ProductId,
    reviews::{NewReview, Review, ReviewSnapshot},
    snapshot::ProductSnapshot,
};
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

use crate::feed::errors::FeedError;

/// Product feed backed by in-process channels.
///
/// Every publish replaces the whole product collection.
pub struct InMemoryProductFeed {
    products: watch::Sender<ProductSnapshot>,
    reviews: Mutex<FxHashMap<ProductId, watch::Sender<ReviewSnapshot>>>,
}

impl InMemoryProductFeed {
    #[must_use]
    pub fn new(snapshot: ProductSnapshot) -> Self {
        Self {
            products: watch::Sender::new(snapshot),
            reviews: Mutex::new(FxHashMap::default()),
        }
    }

    /// Push a new full product snapshot to every subscriber.
    pub fn publish(&self, snapshot: ProductSnapshot) {
        debug!(products = snapshot.len(), "publishing product snapshot");

        self.products.send_replace(snapshot);
    }

    fn review_channel(&self, product: &ProductId) -> watch::Sender<ReviewSnapshot> {
        self.reviews
            .lock()
            .entry(product.clone())
            .or_insert_with(|| watch::Sender::new(ReviewSnapshot::empty(product.clone())))
            .clone()
    }
}

impl Default for InMemoryProductFeed {
    fn default() -> Self {
        Self::new(ProductSnapshot::default())
    }
}

impl Debug for InMemoryProductFeed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryProductFeed")
            .field("products", &self.products.borrow().len())
            .field("reviewed_products", &self.reviews.lock().len())
            .finish()
    }
}

#[async_trait]
impl ProductFeed for InMemoryProductFeed {
    fn subscribe_products(&self) -> watch::Receiver<ProductSnapshot> {
        self.products.subscribe()
    }

    async fn subscribe_reviews(
        &self,
        product: &ProductId,
    ) -> Result<watch::Receiver<ReviewSnapshot>, FeedError> {
        Ok(self.review_channel(product).subscribe())
    }

    async fn submit_review(
        &self,
        product: &ProductId,
        review: NewReview,
    ) -> Result<Review, FeedError> {
        let review = Review::from_new(
            Uuid::now_v7().to_string(),
            product.clone(),
            review,
            Timestamp::now(),
        );

        self.review_channel(product)
            .send_modify(|snapshot| snapshot.push(review.clone()));

        info!(product = %product, review = %review.id, "review stored");

        Ok(review)
    }
}

/// External realtime product feed.
#[automock]
#[async_trait]
pub trait ProductFeed: Send + Sync {
    /// Subscribe to full product snapshots. The receiver starts at the current snapshot.
    fn subscribe_products(&self) -> watch::Receiver<ProductSnapshot>;

    /// Subscribe to the full review collection of one product.
    async fn subscribe_reviews(
        &self,
        product: &ProductId,
    ) -> Result<watch::Receiver<ReviewSnapshot>, FeedError>;

    /// Append a review; the feed assigns its id and timestamp.
    async fn submit_review(
        &self,
        product: &ProductId,
        review: NewReview,
    ) -> Result<Review, FeedError>;
}
