//! MySQL implementation of the RefreshTokenRepository trait.
//!
//! This module provides the concrete implementation of refresh token
//! persistence using MySQL database with SQLx. Token strings are stored as
//! issued; lookups match on the raw string and the owning principal.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kg_core::domain::entities::token::RefreshToken;
use kg_core::errors::{AuthError, AuthResult};
use kg_core::repositories::RefreshTokenRepository;

/// MySQL implementation of RefreshTokenRepository
///
/// This implementation uses SQLx for database operations against the
/// `refresh_tokens` table. The table carries no uniqueness constraint on
/// `principal_id`; the one-token-per-principal invariant is maintained by
/// the auth manager's delete-then-insert ordering.
pub struct MySqlRefreshTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRefreshTokenRepository {
    /// Create a new MySQL refresh token repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    ///
    /// # Returns
    /// A new instance of MySqlRefreshTokenRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshToken entity
    ///
    /// Maps database columns to RefreshToken struct fields
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> AuthResult<RefreshToken> {
        let id: String = row.try_get("id").map_err(|e| AuthError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        let principal_id: String =
            row.try_get("principal_id").map_err(|e| AuthError::Internal {
                message: format!("Failed to get principal_id: {}", e),
            })?;

        Ok(RefreshToken {
            id: Uuid::parse_str(&id).map_err(|e| AuthError::Internal {
                message: format!("Invalid token UUID: {}", e),
            })?,
            principal_id: Uuid::parse_str(&principal_id).map_err(|e| AuthError::Internal {
                message: format!("Invalid principal UUID: {}", e),
            })?,
            token_string: row.try_get("token_string").map_err(|e| AuthError::Internal {
                message: format!("Failed to get token_string: {}", e),
            })?,
            expire_at: row
                .try_get::<DateTime<Utc>, _>("expire_at")
                .map_err(|e| AuthError::Internal {
                    message: format!("Failed to get expire_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl RefreshTokenRepository for MySqlRefreshTokenRepository {
    async fn find_by_principal(&self, principal_id: Uuid) -> AuthResult<Option<RefreshToken>> {
        let query = r#"
            SELECT id, principal_id, token_string, expire_at
            FROM refresh_tokens
            WHERE principal_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(principal_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthError::Store {
                message: format!("Failed to find token by principal: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_token_and_principal(
        &self,
        token_string: &str,
        principal_id: Uuid,
    ) -> AuthResult<Option<RefreshToken>> {
        let query = r#"
            SELECT id, principal_id, token_string, expire_at
            FROM refresh_tokens
            WHERE token_string = ? AND principal_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_string)
            .bind(principal_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthError::Store {
                message: format!("Failed to find refresh token: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_expired_before(&self, cutoff: DateTime<Utc>) -> AuthResult<Vec<RefreshToken>> {
        let query = r#"
            SELECT id, principal_id, token_string, expire_at
            FROM refresh_tokens
            WHERE expire_at < ?
        "#;

        let rows = sqlx::query(query)
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AuthError::Store {
                message: format!("Failed to find expired tokens: {}", e),
            })?;

        let mut tokens = Vec::new();
        for row in rows {
            tokens.push(Self::row_to_token(&row)?);
        }

        Ok(tokens)
    }

    async fn insert(&self, token: RefreshToken) -> AuthResult<RefreshToken> {
        let query = r#"
            INSERT INTO refresh_tokens (id, principal_id, token_string, expire_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.principal_id.to_string())
            .bind(&token.token_string)
            .bind(token.expire_at)
            .execute(&self.pool)
            .await
            .map_err(|e| AuthError::Store {
                message: format!("Failed to insert refresh token: {}", e),
            })?;

        Ok(token)
    }

    async fn delete(&self, token: &RefreshToken) -> AuthResult<bool> {
        let query = "DELETE FROM refresh_tokens WHERE id = ?";

        let result = sqlx::query(query)
            .bind(token.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AuthError::Store {
                message: format!("Failed to delete refresh token: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
