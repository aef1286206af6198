//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing and validation configuration
//! - `database` - Database connection and pool configuration

pub mod auth;
pub mod database;

// Re-export commonly used types
pub use auth::TokenConfig;
pub use database::DatabaseConfig;
