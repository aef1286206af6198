//! Principal repository trait, the contract with the external identity store.

use async_trait::async_trait;

use crate::domain::entities::principal::Principal;
use crate::errors::AuthResult;

/// Read-only lookup into the identity store
///
/// The token flows never create or modify principals; they only resolve the
/// `sub` claim of an access token back to a stored principal.
#[async_trait]
pub trait PrincipalRepository: Send + Sync {
    /// Find a principal by login name
    ///
    /// # Arguments
    /// * `name` - The login name to search for
    ///
    /// # Returns
    /// * `Ok(Some(Principal))` - Principal found
    /// * `Ok(None)` - No principal with that name
    /// * `Err(AuthError)` - Database error occurred
    async fn find_by_name(&self, name: &str) -> AuthResult<Option<Principal>>;
}
