//! Token signing and validation configuration

use serde::{Deserialize, Serialize};

/// JWT token configuration
///
/// Loaded once at startup and treated as immutable afterwards. The same
/// values drive both signing (issuer/audience stamped into new tokens) and
/// validation (issuer/audience/signature checks on decode).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Secret key for HMAC signing of tokens
    pub secret: String,

    /// Issuer claim stamped into and required from every token
    pub issuer: String,

    /// Audience claim stamped into and required from every token
    pub audience: String,

    /// Access token lifetime in minutes
    pub access_token_ttl_minutes: i64,

    /// Refresh token lifetime in minutes
    pub refresh_token_ttl_minutes: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            issuer: String::from("keygate"),
            audience: String::from("keygate-api"),
            access_token_ttl_minutes: 20,
            refresh_token_ttl_minutes: 1440, // 1 day
        }
    }
}

impl TokenConfig {
    /// Create a new token configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);
        let issuer = std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer);
        let audience = std::env::var("JWT_AUDIENCE").unwrap_or(defaults.audience);
        let access_token_ttl_minutes = std::env::var("JWT_ACCESS_TOKEN_TTL_MINUTES")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .unwrap_or(defaults.access_token_ttl_minutes);
        let refresh_token_ttl_minutes = std::env::var("JWT_REFRESH_TOKEN_TTL_MINUTES")
            .unwrap_or_else(|_| "1440".to_string())
            .parse()
            .unwrap_or(defaults.refresh_token_ttl_minutes);

        Self {
            secret,
            issuer,
            audience,
            access_token_ttl_minutes,
            refresh_token_ttl_minutes,
        }
    }

    /// Set the issuer claim
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Set the audience claim
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    /// Set the access token lifetime in minutes
    pub fn with_access_ttl_minutes(mut self, minutes: i64) -> Self {
        self.access_token_ttl_minutes = minutes;
        self
    }

    /// Set the refresh token lifetime in minutes
    pub fn with_refresh_ttl_minutes(mut self, minutes: i64) -> Self {
        self.refresh_token_ttl_minutes = minutes;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "your-secret-key-change-in-production"
    }
}
