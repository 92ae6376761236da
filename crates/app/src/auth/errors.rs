//! Identity errors.

use thiserror::Error;

/// Sign-in and sign-up form problems caught before calling the identity provider.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthFormError {
    #[error("Please enter both email and password.")]
    MissingLoginFields,

    #[error("Please fill in all fields.")]
    MissingSignupFields,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Password should be at least 6 characters long.")]
    PasswordTooShort,
}

/// Identity errors. Provider messages are passed through verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error(transparent)]
    Form(#[from] AuthFormError),

    #[error("{0}")]
    Provider(String),
}
