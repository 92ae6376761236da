//! Storefront
//!
//! Owns the shopper's session and the projected product list, and keeps both
//! in step with the identity provider and the product feed.

use std::fmt::{self, Debug, Formatter};

use jiff::Timestamp;
use storefront::{
    cart::Cart,
    checkout::{CheckoutForm, OrderConfirmation},
    products::{Product, ProductId},
    projection::{OriginFilter, SortOption, ViewParams},
    reviews::{NewReview, Review, ReviewSummary},
    snapshot::{ProductLookup, ProductSnapshot},
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    auth::{AuthError, Credentials, SignupForm, User},
    checkout::{CheckoutError, place_order},
    context::AppContext,
    reviews::ReviewServiceError,
    session::{Session, SessionError},
};

/// Changes observed on the collaborator channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorefrontEvent {
    /// A new product snapshot replaced the displayed list.
    ProductsUpdated,

    /// A user signed in and a fresh session started.
    SignedIn(User),

    /// The session ended and its cart was discarded.
    SignedOut,
}

enum Change {
    Identity,
    Products,
}

/// A shopper's view of the store.
///
/// Holds at most one [`Session`]; signing out drops it along with its cart.
pub struct Storefront {
    context: AppContext,
    identity_rx: watch::Receiver<Option<User>>,
    products_rx: watch::Receiver<ProductSnapshot>,
    snapshot: ProductSnapshot,
    view: ViewParams,
    displayed: Vec<Product>,
    session: Option<Session>,
}

impl Storefront {
    /// Subscribe to the collaborators and take their current state.
    #[must_use]
    pub fn new(context: AppContext) -> Self {
        let mut identity_rx = context.identity.subscribe();
        let mut products_rx = context.feed.subscribe_products();

        let user = identity_rx.borrow_and_update().clone();
        let snapshot = products_rx.borrow_and_update().clone();

        let mut storefront = Self {
            context,
            identity_rx,
            products_rx,
            snapshot,
            view: ViewParams::default(),
            displayed: Vec::new(),
            session: None,
        };

        storefront.reproject();
        storefront.apply_identity(user);

        storefront
    }

    /// Wait for the next identity or product change and apply it.
    ///
    /// Returns `None` once both channels have closed.
    pub async fn next_event(&mut self) -> Option<StorefrontEvent> {
        loop {
            let change = tokio::select! {
                biased;
                Ok(()) = self.identity_rx.changed() => Change::Identity,
                Ok(()) = self.products_rx.changed() => Change::Products,
                else => return None,
            };

            match change {
                Change::Identity => {
                    if let Some(event) = self.sync_identity() {
                        return Some(event);
                    }
                }
                Change::Products => {
                    self.sync_products();

                    return Some(StorefrontEvent::ProductsUpdated);
                }
            }
        }
    }

    /// Apply the latest identity, if it changed.
    pub fn sync_identity(&mut self) -> Option<StorefrontEvent> {
        let user = self.identity_rx.borrow_and_update().clone();

        self.apply_identity(user)
    }

    /// Replace the snapshot with the latest one from the feed and reproject.
    pub fn sync_products(&mut self) {
        self.snapshot = self.products_rx.borrow_and_update().clone();

        debug!(products = self.snapshot.len(), "product snapshot received");

        self.reproject();
    }

    fn apply_identity(&mut self, user: Option<User>) -> Option<StorefrontEvent> {
        let current = self.session.as_ref().map(|session| session.user().uid);

        match user {
            Some(user) if current == Some(user.uid) => None,
            Some(user) => {
                info!(uid = %user.uid, "session started");

                self.session = Some(Session::start(user.clone()));

                Some(StorefrontEvent::SignedIn(user))
            }
            None => {
                let session = self.session.take()?;

                info!(
                    uid = %session.user().uid,
                    started_at = %session.started_at(),
                    items = session.cart().cart_item_count(),
                    "session ended"
                );

                Some(StorefrontEvent::SignedOut)
            }
        }
    }

    fn reproject(&mut self) {
        self.displayed = self.view.project(self.snapshot.iter());
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.search = search.into();
        self.reproject();
    }

    pub fn set_origin(&mut self, origin: OriginFilter) {
        self.view.origin = origin;
        self.reproject();
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.view.sort = sort;
        self.reproject();
    }

    pub fn view(&self) -> &ViewParams {
        &self.view
    }

    /// Products as currently displayed.
    pub fn displayed(&self) -> &[Product] {
        &self.displayed
    }

    /// Look a product up in the latest snapshot.
    pub fn product(&self, id: &ProductId) -> ProductLookup<'_> {
        self.snapshot.lookup(id)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(Session::user)
    }

    pub fn cart(&self) -> Option<&Cart> {
        self.session.as_ref().map(Session::cart)
    }

    /// The signed-in shopper's cart.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SignedOut`] without a session.
    pub fn cart_mut(&mut self) -> Result<&mut Cart, SessionError> {
        self.session
            .as_mut()
            .map(Session::cart_mut)
            .ok_or(SessionError::SignedOut)
    }

    /// Sign in. A failed attempt leaves the current session as it was.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] for an incomplete form or a provider rejection.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<User, AuthError> {
        credentials.check_login()?;

        let user = self.context.identity.login(credentials).await?;

        self.apply_identity(Some(user.clone()));

        Ok(user)
    }

    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] for an invalid form or a provider rejection.
    pub async fn signup(&mut self, form: &SignupForm) -> Result<User, AuthError> {
        let credentials = form.validate()?;

        let user = self.context.identity.signup(&credentials).await?;

        self.apply_identity(Some(user.clone()));

        Ok(user)
    }

    /// Sign out, discarding the session and its cart.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the provider refuses; the session is kept.
    pub async fn logout(&mut self) -> Result<(), AuthError> {
        self.context.identity.logout().await?;

        self.apply_identity(None);

        Ok(())
    }

    /// Place an order for the current cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] when signed out, the cart is empty or the
    /// form is invalid. The cart is only cleared on success.
    pub fn checkout(&mut self, form: &CheckoutForm) -> Result<OrderConfirmation, CheckoutError> {
        let cart = self.cart_mut()?;

        place_order(cart, form, Timestamp::now())
    }

    /// Current reviews for a product, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewServiceError::ProductNotFound`] for an unknown product
    /// or a feed error.
    pub async fn reviews(&self, id: &ProductId) -> Result<ReviewSummary, ReviewServiceError> {
        if self.snapshot.get(id).is_none() {
            return Err(ReviewServiceError::ProductNotFound(id.clone()));
        }

        let reviews = self.context.feed.subscribe_reviews(id).await?;
        let summary = reviews.borrow().summary();

        Ok(summary)
    }

    /// Submit a review as the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns a [`ReviewServiceError`] when signed out, for an unknown
    /// product, an invalid rating or comment, or a feed rejection.
    pub async fn submit_review(
        &self,
        id: &ProductId,
        rating: u8,
        comment: &str,
    ) -> Result<Review, ReviewServiceError> {
        let user = self.user().ok_or(SessionError::SignedOut)?;

        if self.snapshot.get(id).is_none() {
            return Err(ReviewServiceError::ProductNotFound(id.clone()));
        }

        let review = NewReview::new(rating, comment, user.as_review_author())?;

        match self.context.feed.submit_review(id, review).await {
            Ok(review) => {
                info!(product = %id, rating = review.rating.stars(), "review submitted");

                Ok(review)
            }
            Err(error) => {
                warn!(product = %id, %error, "review submission failed");

                Err(error.into())
            }
        }
    }
}

impl Debug for Storefront {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storefront")
            .field("products", &self.snapshot.len())
            .field("view", &self.view)
            .field("displayed", &self.displayed.len())
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
