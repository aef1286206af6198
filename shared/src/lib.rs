//! Shared configuration types for the KeyGate server
//!
//! This crate provides the configuration surface used across the server
//! modules:
//! - Token signing and validation configuration
//! - Database connection and pool configuration

pub mod config;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, TokenConfig};
