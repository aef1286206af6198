//! Refresh token repository trait defining the interface for token persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::AuthResult;

/// Repository trait for RefreshToken entity persistence operations
///
/// This trait defines the contract for managing refresh tokens in the
/// database. The store enforces no uniqueness constraints of its own; the
/// one-token-per-principal invariant is asserted by the auth manager's
/// delete-then-insert ordering. Each operation is atomic and its effect is
/// visible to subsequent operations once it returns.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Find the refresh token held by a principal, if any
    ///
    /// # Arguments
    /// * `principal_id` - The UUID of the owning principal
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - The principal's current token
    /// * `Ok(None)` - The principal holds no token
    /// * `Err(AuthError)` - Database error occurred
    async fn find_by_principal(&self, principal_id: Uuid) -> AuthResult<Option<RefreshToken>>;

    /// Find a refresh token by its value scoped to a principal
    ///
    /// Both the token value and the owner must match; a valid token value
    /// presented for the wrong principal finds nothing.
    ///
    /// # Arguments
    /// * `token_string` - The opaque token value presented by the client
    /// * `principal_id` - The UUID of the claimed owner
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Token found for this principal
    /// * `Ok(None)` - No such token for this principal
    /// * `Err(AuthError)` - Database error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use kg_core::repositories::RefreshTokenRepository;
    /// # async fn example(repo: &impl RefreshTokenRepository, principal_id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_token_and_principal("presented-value", principal_id).await? {
    ///     Some(token) => println!("Token expires at: {}", token.expire_at),
    ///     None => println!("Token not recognized"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_token_and_principal(
        &self,
        token_string: &str,
        principal_id: Uuid,
    ) -> AuthResult<Option<RefreshToken>>;

    /// Find all refresh tokens that expired before the given cutoff
    ///
    /// # Arguments
    /// * `cutoff` - Tokens with `expire_at` strictly before this instant match
    ///
    /// # Returns
    /// * `Ok(Vec<RefreshToken>)` - The expired tokens, possibly empty
    /// * `Err(AuthError)` - Database error occurred
    async fn find_expired_before(&self, cutoff: DateTime<Utc>) -> AuthResult<Vec<RefreshToken>>;

    /// Insert a new refresh token
    ///
    /// # Arguments
    /// * `token` - The RefreshToken entity to persist
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The stored token
    /// * `Err(AuthError)` - Insert failed
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use chrono::{Duration, Utc};
    /// # use kg_core::repositories::RefreshTokenRepository;
    /// # use kg_core::domain::entities::token::RefreshToken;
    /// # async fn example(repo: &impl RefreshTokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let principal_id = Uuid::new_v4();
    /// let token = RefreshToken::new(
    ///     principal_id,
    ///     "random-value".to_string(),
    ///     Utc::now() + Duration::minutes(1440),
    /// );
    ///
    /// let stored = repo.insert(token).await?;
    /// println!("Token stored with ID: {}", stored.id);
    /// # Ok(())
    /// # }
    /// ```
    async fn insert(&self, token: RefreshToken) -> AuthResult<RefreshToken>;

    /// Delete a refresh token
    ///
    /// A token that was already removed, for example by a concurrent
    /// refresh, is not an error.
    ///
    /// # Arguments
    /// * `token` - The token to remove, matched by its `id`
    ///
    /// # Returns
    /// * `Ok(true)` - Token was deleted
    /// * `Ok(false)` - Token was already gone
    /// * `Err(AuthError)` - Deletion failed
    async fn delete(&self, token: &RefreshToken) -> AuthResult<bool>;
}
