//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the KeyGate token
//! services. It provides the MySQL implementations of the `kg_core`
//! repository traits and manages the database connection pool.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL implementations using SQLx
//! - **Connection**: Pool construction, health checks, and statistics

// Re-export core types for convenience
pub use kg_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
