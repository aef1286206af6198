//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors for token issuance, validation, and rotation
#[derive(Error, Debug)]
pub enum AuthError {
    /// The presented token is malformed, mis-signed, carries the wrong
    /// issuer or audience, or names an unknown or expired refresh token.
    #[error("Invalid token: {reason}")]
    InvalidToken { reason: String },

    /// The token subject does not resolve to a known principal.
    #[error("Invalid user: {name}")]
    InvalidUser { name: String },

    /// A storage operation failed; carries the underlying message.
    #[error("Store error: {message}")]
    Store { message: String },

    /// Configuration rejected at construction time.
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type AuthResult<T> = Result<T, AuthError>;
