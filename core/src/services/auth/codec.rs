//! Token codec for JWT signing and validation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

pub use jsonwebtoken::TokenData;

use kg_shared::config::TokenConfig;

use crate::domain::entities::token::Claims;
use crate::errors::{AuthError, AuthResult};

/// Leeway applied to the expiry check, absorbing clock skew between hosts
pub const CLOCK_SKEW_LEEWAY_SECONDS: u64 = 60;

/// Claim names owned by the struct fields of [`Claims`]
const REGISTERED_CLAIM_NAMES: [&str; 4] = ["sub", "exp", "iss", "aud"];

/// Codec for signing and validating HS256 access tokens
///
/// Keys and validation rules are derived from the configuration once at
/// construction. Two validations are kept: the strict one used for bearer
/// tokens, and a variant with the expiry comparison disabled for the
/// refresh flow, where presenting an already-expired access token is the
/// expected case. The relaxed variant still verifies signature, issuer,
/// audience, and the presence of the `exp` claim.
pub struct TokenCodec {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    refresh_validation: Validation,
}

impl TokenCodec {
    /// Creates a new token codec
    ///
    /// # Arguments
    ///
    /// * `config` - Token signing and validation configuration
    ///
    /// # Returns
    ///
    /// A new `TokenCodec` instance, or `Config` if the secret is blank
    pub fn new(config: TokenConfig) -> AuthResult<Self> {
        if config.secret.trim().is_empty() {
            return Err(AuthError::Config {
                message: "JWT secret must not be empty".to_string(),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.leeway = CLOCK_SKEW_LEEWAY_SECONDS;

        let mut refresh_validation = validation.clone();
        refresh_validation.validate_exp = false;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            refresh_validation,
        })
    }

    /// Issues a signed access token
    ///
    /// Stamps the configured issuer and an expiry of `now + ttl_minutes`.
    /// The configured audience is stamped only when the supplied claims do
    /// not already carry one, so claims recovered from an earlier token keep
    /// their original audience. Issuance is deterministic: identical claims,
    /// instant, and lifetime always produce the identical token string.
    ///
    /// # Arguments
    ///
    /// * `claims` - The claims to embed; `sub` and custom entries pass through
    /// * `now` - The instant the expiry is computed from
    /// * `ttl_minutes` - Token lifetime in minutes
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token
    /// * `Err(AuthError)` - Signing failed
    pub fn issue(
        &self,
        claims: &Claims,
        now: DateTime<Utc>,
        ttl_minutes: i64,
    ) -> AuthResult<String> {
        let mut payload = claims.clone();
        payload.iss = self.config.issuer.clone();
        payload.exp = (now + Duration::minutes(ttl_minutes)).timestamp();
        if payload.aud.trim().is_empty() {
            payload.aud = self.config.audience.clone();
        }
        // Struct fields are authoritative for registered claims; the same
        // name in the custom map would serialize the key twice.
        for name in REGISTERED_CLAIM_NAMES {
            payload.custom.remove(name);
        }

        let header = Header::new(Algorithm::HS256);
        encode(&header, &payload, &self.encoding_key).map_err(|e| AuthError::Internal {
            message: format!("Failed to sign token: {}", e),
        })
    }

    /// Decodes and fully validates an access token
    ///
    /// Checks signature, issuer, audience, and expiry (with
    /// [`CLOCK_SKEW_LEEWAY_SECONDS`] of leeway). Any failure maps to
    /// `InvalidToken`; empty or whitespace-only input is rejected before the
    /// parser runs.
    ///
    /// # Arguments
    ///
    /// * `token` - The JWT access token to validate
    ///
    /// # Returns
    ///
    /// * `Ok(TokenData<Claims>)` - The parsed header and claims
    /// * `Err(AuthError)` - Token is invalid, expired, or malformed
    pub fn decode(&self, token: &str) -> AuthResult<TokenData<Claims>> {
        self.decode_with(token, &self.validation)
    }

    /// Decodes an access token, ignoring its expiry
    ///
    /// Used by the refresh flow, where the access token being expired is the
    /// reason the caller is here. Signature, issuer, audience, and the
    /// presence of `exp` are still enforced.
    ///
    /// # Arguments
    ///
    /// * `token` - The JWT access token to validate
    ///
    /// # Returns
    ///
    /// * `Ok(TokenData<Claims>)` - The parsed header and claims
    /// * `Err(AuthError)` - Token is invalid or malformed
    pub fn decode_allow_expired(&self, token: &str) -> AuthResult<TokenData<Claims>> {
        self.decode_with(token, &self.refresh_validation)
    }

    fn decode_with(&self, token: &str, validation: &Validation) -> AuthResult<TokenData<Claims>> {
        if token.trim().is_empty() {
            return Err(AuthError::InvalidToken {
                reason: "token is empty".to_string(),
            });
        }

        decode::<Claims>(token, &self.decoding_key, validation).map_err(|e| {
            let reason = match e.kind() {
                ErrorKind::ExpiredSignature => "token has expired".to_string(),
                ErrorKind::ImmatureSignature => "token is not yet valid".to_string(),
                ErrorKind::InvalidIssuer => "issuer mismatch".to_string(),
                ErrorKind::InvalidAudience => "audience mismatch".to_string(),
                ErrorKind::InvalidSignature => "signature verification failed".to_string(),
                _ => format!("malformed token: {}", e),
            };
            AuthError::InvalidToken { reason }
        })
    }
}
