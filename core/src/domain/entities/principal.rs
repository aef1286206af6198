//! Principal entity, the narrow view of the external identity store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A principal known to the identity store
///
/// Token flows only need the identifier and the login name; everything else
/// about a user stays in the identity store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Unique identifier for the principal
    pub id: Uuid,

    /// Login name, matched against the `sub` claim of access tokens
    pub name: String,
}

impl Principal {
    /// Creates a new Principal instance
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
