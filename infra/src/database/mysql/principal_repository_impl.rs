//! MySQL implementation of the PrincipalRepository trait.
//!
//! Resolves access-token subjects against the `principals` table.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kg_core::domain::entities::principal::Principal;
use kg_core::errors::{AuthError, AuthResult};
use kg_core::repositories::PrincipalRepository;

/// MySQL implementation of PrincipalRepository
pub struct MySqlPrincipalRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlPrincipalRepository {
    /// Create a new MySQL principal repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    ///
    /// # Returns
    /// A new instance of MySqlPrincipalRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Principal entity
    fn row_to_principal(row: &sqlx::mysql::MySqlRow) -> AuthResult<Principal> {
        let id: String = row.try_get("id").map_err(|e| AuthError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Principal {
            id: Uuid::parse_str(&id).map_err(|e| AuthError::Internal {
                message: format!("Invalid principal UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| AuthError::Internal {
                message: format!("Failed to get name: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl PrincipalRepository for MySqlPrincipalRepository {
    async fn find_by_name(&self, name: &str) -> AuthResult<Option<Principal>> {
        let query = r#"
            SELECT id, name
            FROM principals
            WHERE name = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthError::Store {
                message: format!("Failed to find principal by name: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_principal(&row)?)),
            None => Ok(None),
        }
    }
}
