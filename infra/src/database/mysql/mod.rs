//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

pub mod principal_repository_impl;
pub mod token_repository_impl;

// Re-export the MySQL implementations
pub use principal_repository_impl::MySqlPrincipalRepository;
pub use token_repository_impl::MySqlRefreshTokenRepository;
