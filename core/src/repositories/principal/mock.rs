//! Mock implementation of PrincipalRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::principal::Principal;
use crate::errors::AuthResult;

use super::r#trait::PrincipalRepository;

/// Mock principal repository for testing
pub struct MockPrincipalRepository {
    principals: Arc<RwLock<HashMap<String, Principal>>>,
}

impl MockPrincipalRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            principals: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed a principal, keyed by name
    pub async fn add(&self, principal: Principal) {
        let mut principals = self.principals.write().await;
        principals.insert(principal.name.clone(), principal);
    }
}

impl Default for MockPrincipalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrincipalRepository for MockPrincipalRepository {
    async fn find_by_name(&self, name: &str) -> AuthResult<Option<Principal>> {
        let principals = self.principals.read().await;
        Ok(principals.get(name).cloned())
    }
}
