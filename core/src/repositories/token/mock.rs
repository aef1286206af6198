//! Mock implementation of RefreshTokenRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::AuthResult;

use super::r#trait::RefreshTokenRepository;

/// Mock refresh token repository for testing
pub struct MockRefreshTokenRepository {
    tokens: Arc<RwLock<HashMap<Uuid, RefreshToken>>>,
}

impl MockRefreshTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of tokens currently stored
    pub async fn count(&self) -> usize {
        self.tokens.read().await.len()
    }
}

impl Default for MockRefreshTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenRepository for MockRefreshTokenRepository {
    async fn find_by_principal(&self, principal_id: Uuid) -> AuthResult<Option<RefreshToken>> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .values()
            .find(|t| t.principal_id == principal_id)
            .cloned())
    }

    async fn find_by_token_and_principal(
        &self,
        token_string: &str,
        principal_id: Uuid,
    ) -> AuthResult<Option<RefreshToken>> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .values()
            .find(|t| t.token_string == token_string && t.principal_id == principal_id)
            .cloned())
    }

    async fn find_expired_before(&self, cutoff: DateTime<Utc>) -> AuthResult<Vec<RefreshToken>> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .values()
            .filter(|t| t.expire_at < cutoff)
            .cloned()
            .collect())
    }

    async fn insert(&self, token: RefreshToken) -> AuthResult<RefreshToken> {
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.id, token.clone());
        Ok(token)
    }

    async fn delete(&self, token: &RefreshToken) -> AuthResult<bool> {
        let mut tokens = self.tokens.write().await;
        Ok(tokens.remove(&token.id).is_some())
    }
}
