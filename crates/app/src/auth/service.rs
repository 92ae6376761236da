//! Identity provider.

use std::fmt::{self, Debug, Formatter};

use async_trait::async_trait;
use mockall::automock;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tokio::sync::watch;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::{
    errors::AuthError,
    models::{Credentials, MIN_PASSWORD_LEN, User},
};

const BADLY_FORMATTED_EMAIL: &str = "The email address is badly formatted.";
const WEAK_PASSWORD: &str = "Password should be at least 6 characters.";
const EMAIL_IN_USE: &str = "The email address is already in use by another account.";
const INVALID_CREDENTIALS: &str = "Invalid email or password.";

struct Account {
    user: User,
    password: String,
}

/// Identity provider holding accounts in memory.
///
/// Signing up signs the new account in, matching hosted providers.
pub struct InMemoryIdentityProvider {
    accounts: Mutex<FxHashMap<String, Account>>,
    session: watch::Sender<Option<User>>,
}

impl InMemoryIdentityProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(FxHashMap::default()),
            session: watch::Sender::new(None),
        }
    }

    /// The currently signed-in user.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.session.borrow().clone()
    }
}

impl Default for InMemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for InMemoryIdentityProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryIdentityProvider")
            .field("accounts", &self.accounts.lock().len())
            .field("session", &*self.session.borrow())
            .finish()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.session.subscribe()
    }

    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let key = normalize_email(&credentials.email);

        let user = {
            let accounts = self.accounts.lock();

            accounts
                .get(&key)
                .filter(|account| account.password == credentials.password)
                .map(|account| account.user.clone())
        };

        let Some(user) = user else {
            warn!(email = %key, "login rejected");

            return Err(AuthError::Provider(INVALID_CREDENTIALS.to_string()));
        };

        info!(uid = %user.uid, "signed in");

        self.session.send_replace(Some(user.clone()));

        Ok(user)
    }

    async fn signup(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let key = normalize_email(&credentials.email);

        if !is_well_formed_email(&key) {
            return Err(AuthError::Provider(BADLY_FORMATTED_EMAIL.to_string()));
        }

        if credentials.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::Provider(WEAK_PASSWORD.to_string()));
        }

        let user = {
            let mut accounts = self.accounts.lock();

            if accounts.contains_key(&key) {
                return Err(AuthError::Provider(EMAIL_IN_USE.to_string()));
            }

            let user = User {
                uid: Uuid::now_v7(),
                email: key.clone(),
            };

            accounts.insert(
                key,
                Account {
                    user: user.clone(),
                    password: credentials.password.clone(),
                },
            );

            user
        };

        info!(uid = %user.uid, "signed up");

        self.session.send_replace(Some(user.clone()));

        Ok(user)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        if let Some(user) = self.session.send_replace(None) {
            info!(uid = %user.uid, "signed out");
        }

        Ok(())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !email.chars().any(char::is_whitespace)
}

/// External identity provider.
#[automock]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Subscribe to session identity changes. The receiver starts at the current identity.
    fn subscribe(&self) -> watch::Receiver<Option<User>>;

    /// Sign in with existing credentials.
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError>;

    /// Create an account and sign it in.
    async fn signup(&self, credentials: &Credentials) -> Result<User, AuthError>;

    /// Sign the current user out.
    async fn logout(&self) -> Result<(), AuthError>;
}
