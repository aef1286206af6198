//! Token entities for JWT-based authentication.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for JWT payload
///
/// The registered claims live in their own fields; everything else rides in
/// `custom`, which flattens into the payload on serialization. `custom` is a
/// `BTreeMap` so the serialized payload has a stable key order and identical
/// inputs always sign to identical tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (principal name)
    pub sub: String,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Additional string claims carried verbatim through issue and refresh
    #[serde(flatten)]
    pub custom: BTreeMap<String, String>,
}

impl Claims {
    /// Creates claims for a subject, leaving the registered fields for the
    /// codec to stamp at issuance
    ///
    /// # Arguments
    ///
    /// * `subject` - The principal name to place in `sub`
    ///
    /// # Returns
    ///
    /// A new `Claims` instance with empty issuer/audience and zero expiry
    pub fn for_subject(subject: impl Into<String>) -> Self {
        Self {
            sub: subject.into(),
            exp: 0,
            iss: String::new(),
            aud: String::new(),
            custom: BTreeMap::new(),
        }
    }

    /// Adds a custom claim, replacing any previous value for the key
    ///
    /// # Arguments
    ///
    /// * `key` - Claim name
    /// * `value` - Claim value
    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }
}

/// Refresh token entity stored in the database
///
/// Serializes with camelCase field names; this is the exact shape returned
/// to callers inside [`AuthTokens`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshToken {
    /// Unique identifier for the refresh token
    pub id: Uuid,

    /// Principal this token belongs to
    pub principal_id: Uuid,

    /// Opaque random token value presented by the client on refresh
    pub token_string: String,

    /// Timestamp after which the token no longer refreshes
    pub expire_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token
    ///
    /// # Arguments
    ///
    /// * `principal_id` - The owning principal's UUID
    /// * `token_string` - The random token value
    /// * `expire_at` - Expiry timestamp
    ///
    /// # Returns
    ///
    /// A new `RefreshToken` instance with a fresh UUID
    pub fn new(principal_id: Uuid, token_string: String, expire_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            principal_id,
            token_string,
            expire_at,
        }
    }

    /// Checks whether the token is expired as of the given instant
    ///
    /// The comparison is strict: a token expiring exactly at `now` is still
    /// live.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expire_at < now
    }
}

/// Token pair returned to the client after issuance or refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    /// Signed JWT access token
    pub access_token: String,

    /// The stored refresh token, returned in full
    pub refresh_token: RefreshToken,
}

impl AuthTokens {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: RefreshToken) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
