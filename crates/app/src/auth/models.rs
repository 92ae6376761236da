//! Identity Models

use std::fmt::{self, Debug, Formatter};

use storefront::reviews::ReviewAuthor;
use uuid::Uuid;

use crate::auth::errors::AuthFormError;

/// Minimum password length accepted at sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Signed-in user, as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub uid: Uuid,
    pub email: String,
}

impl User {
    /// The user as shown next to their reviews.
    #[must_use]
    pub fn as_review_author(&self) -> ReviewAuthor {
        ReviewAuthor {
            uid: self.uid.to_string(),
            email: self.email.clone(),
        }
    }
}

/// Email and password credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the login form is filled in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFormError::MissingLoginFields`] if either field is empty.
    pub fn check_login(&self) -> Result<(), AuthFormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AuthFormError::MissingLoginFields);
        }

        Ok(())
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Sign-up form input.
#[derive(Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Check the form and produce credentials for the identity provider.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthFormError`] for empty fields, mismatched passwords or a short password.
    pub fn validate(&self) -> Result<Credentials, AuthFormError> {
        if self.email.is_empty() || self.password.is_empty() || self.confirm_password.is_empty() {
            return Err(AuthFormError::MissingSignupFields);
        }

        if self.password != self.confirm_password {
            return Err(AuthFormError::PasswordMismatch);
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthFormError::PasswordTooShort);
        }

        Ok(Credentials::new(self.email.clone(), self.password.clone()))
    }
}

impl Debug for SignupForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
