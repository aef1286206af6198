//! Authentication service module for JWT management
//!
//! This module handles all token-related operations including:
//! - JWT access token issuance and validation
//! - Refresh token rotation with one live token per principal
//! - Background sweeping of expired refresh tokens

mod codec;
mod manager;
mod sweeper;

#[cfg(test)]
mod tests;

pub use codec::{TokenCodec, TokenData, CLOCK_SKEW_LEEWAY_SECONDS};
pub use manager::AuthManager;
pub use sweeper::{ExpirySweeper, SweeperHandle, SWEEP_INTERVAL_SECONDS};
