//! Shopping Session
//!
//! A session starts when a user signs in and ends when they sign out; the
//! cart lives and dies with it.

use jiff::Timestamp;
use storefront::cart::Cart;
use thiserror::Error;

use crate::auth::User;

/// Errors for operations that need a signed-in shopper.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please sign in to continue.")]
    SignedOut,
}

/// A signed-in shopper and their cart.
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
    cart: Cart,
    started_at: Timestamp,
}

impl Session {
    /// Start a session with an empty cart.
    #[must_use]
    pub fn start(user: User) -> Self {
        Self {
            user,
            cart: Cart::new(),
            started_at: Timestamp::now(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }
}
