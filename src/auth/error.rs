//! Authentication errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately indistinguishable.
    #[error("Bad email or password")]
    InvalidCredentials,

    #[error("Missing bearer token")]
    MissingToken,

    /// Bad signature, expired, wrong purpose, or already used.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// True for backend failures that are not the caller's fault.
    pub fn is_internal(&self) -> bool {
        matches!(self, AuthError::Hash(_) | AuthError::Signing(_))
    }
}
