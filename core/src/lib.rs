//! # KeyGate Core
//!
//! Core business logic and domain layer for the KeyGate backend.
//! This crate contains the token entities, the auth manager and token codec
//! services, repository interfaces, and error types that form the token
//! issuance and rotation protocol.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::entities::{AuthTokens, Claims, Principal, RefreshToken};
pub use services::auth::{AuthManager, ExpirySweeper, SweeperHandle, TokenCodec, TokenData};
pub use repositories::{PrincipalRepository, RefreshTokenRepository};
pub use errors::{AuthError, AuthResult};
