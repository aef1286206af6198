//! Auth manager: token pair issuance, refresh rotation, and revocation

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::Algorithm;
use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use kg_shared::config::TokenConfig;

use crate::domain::entities::token::{AuthTokens, Claims, RefreshToken};
use crate::errors::{AuthError, AuthResult};
use crate::repositories::principal::PrincipalRepository;
use crate::repositories::token::RefreshTokenRepository;

use super::codec::{TokenCodec, TokenData};

/// Entropy of a refresh-token string before encoding
const REFRESH_TOKEN_BYTES: usize = 32;

/// Orchestrates the access/refresh token lifecycle for principals
///
/// Owns the codec and mediates every store access. Each principal holds at
/// most one live refresh token; the manager maintains this by deleting any
/// existing record before inserting a replacement, so the store itself needs
/// no uniqueness constraint. Refresh is a rotation: the presented token is
/// consumed and a fresh pair is issued with the decoded claims carried
/// forward.
pub struct AuthManager<R, P>
where
    R: RefreshTokenRepository,
    P: PrincipalRepository,
{
    tokens: Arc<R>,
    principals: Arc<P>,
    codec: TokenCodec,
    config: TokenConfig,
}

impl<R, P> AuthManager<R, P>
where
    R: RefreshTokenRepository,
    P: PrincipalRepository,
{
    /// Creates a new auth manager
    ///
    /// # Arguments
    ///
    /// * `tokens` - Refresh token store
    /// * `principals` - Identity store for subject resolution
    /// * `config` - Token signing configuration and lifetimes
    ///
    /// # Returns
    ///
    /// A new `AuthManager`, or `Config` if the secret is blank or a
    /// lifetime is not positive
    pub fn new(tokens: Arc<R>, principals: Arc<P>, config: TokenConfig) -> AuthResult<Self> {
        if config.access_token_ttl_minutes <= 0 {
            return Err(AuthError::Config {
                message: format!(
                    "Access token TTL must be positive, got {}",
                    config.access_token_ttl_minutes
                ),
            });
        }
        if config.refresh_token_ttl_minutes <= 0 {
            return Err(AuthError::Config {
                message: format!(
                    "Refresh token TTL must be positive, got {}",
                    config.refresh_token_ttl_minutes
                ),
            });
        }

        let codec = TokenCodec::new(config.clone())?;

        Ok(Self {
            tokens,
            principals,
            codec,
            config,
        })
    }

    /// Issues a fresh access/refresh token pair for a principal
    ///
    /// The access token is signed with the configured access lifetime. The
    /// refresh token is a random 256-bit string stored against the principal
    /// with the configured refresh lifetime. Any refresh token the principal
    /// already held is deleted before the new record is inserted; if the
    /// insert then fails, the principal is left with no token and the caller
    /// retries.
    ///
    /// # Arguments
    ///
    /// * `principal_id` - The principal the pair is issued to
    /// * `claims` - Claims embedded in the access token
    /// * `now` - The instant both expiries are computed from
    ///
    /// # Returns
    ///
    /// * `Ok(AuthTokens)` - The signed access token and stored refresh token
    /// * `Err(AuthError)` - Signing or store failure
    pub async fn generate_tokens(
        &self,
        principal_id: Uuid,
        claims: Claims,
        now: DateTime<Utc>,
    ) -> AuthResult<AuthTokens> {
        let access_token = self
            .codec
            .issue(&claims, now, self.config.access_token_ttl_minutes)?;

        let token_string = Self::generate_refresh_string();
        let expire_at = now + Duration::minutes(self.config.refresh_token_ttl_minutes);
        let refresh_token = RefreshToken::new(principal_id, token_string, expire_at);

        self.remove_refresh_token_by_principal(principal_id).await?;
        let stored = self.tokens.insert(refresh_token).await?;

        debug!("Issued token pair for principal {}", principal_id);

        Ok(AuthTokens::new(access_token, stored))
    }

    /// Rotates a token pair
    ///
    /// The access token is validated with its expiry ignored, since an
    /// expired access token is the normal reason to be here. The refresh
    /// token must match a live stored record for the token's subject. On
    /// success the matched record is consumed and a new pair is issued with
    /// the decoded claims carried forward unchanged. Of two rotations racing
    /// on the same token, only the one that deletes the record re-issues.
    ///
    /// The current instant is sampled once on entry and used for both the
    /// expiry gate and the re-issued pair.
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - The refresh-token string being redeemed
    /// * `access_token` - The access token from the expiring pair
    ///
    /// # Returns
    ///
    /// * `Ok(AuthTokens)` - The replacement pair
    /// * `Err(AuthError::InvalidToken)` - Access token fails validation, the
    ///   refresh token is unknown for the subject, the record has expired, or
    ///   a concurrent rotation consumed it first
    /// * `Err(AuthError::InvalidUser)` - The subject resolves to no principal
    pub async fn refresh(&self, refresh_token: &str, access_token: &str) -> AuthResult<AuthTokens> {
        let now = Utc::now();

        let decoded = self.codec.decode_allow_expired(access_token)?;
        if decoded.header.alg != Algorithm::HS256 {
            return Err(AuthError::InvalidToken {
                reason: "unexpected signing algorithm".to_string(),
            });
        }

        let subject = decoded.claims.sub.clone();
        let principal = self
            .principals
            .find_by_name(&subject)
            .await?
            .ok_or(AuthError::InvalidUser { name: subject })?;

        let record = self
            .tokens
            .find_by_token_and_principal(refresh_token, principal.id)
            .await?
            .ok_or_else(|| AuthError::InvalidToken {
                reason: "refresh token not recognized".to_string(),
            })?;

        // An expired record stays in place for the sweeper; this attempt
        // simply fails.
        if record.is_expired_at(now) {
            return Err(AuthError::InvalidToken {
                reason: "refresh token has expired".to_string(),
            });
        }

        // Deleting the matched record is the commit point: only the rotation
        // that removes the row may issue a replacement pair.
        if !self.tokens.delete(&record).await? {
            return Err(AuthError::InvalidToken {
                reason: "refresh token already consumed".to_string(),
            });
        }

        self.generate_tokens(principal.id, decoded.claims, now).await
    }

    /// Deletes the refresh token held by a principal, if any
    ///
    /// Idempotent: a principal with no stored token is a no-op. Exposed for
    /// revocation (logout) and used internally before every insert.
    ///
    /// # Arguments
    ///
    /// * `principal_id` - The principal whose token is revoked
    pub async fn remove_refresh_token_by_principal(&self, principal_id: Uuid) -> AuthResult<()> {
        if let Some(existing) = self.tokens.find_by_principal(principal_id).await? {
            self.tokens.delete(&existing).await?;
            debug!("Revoked refresh token for principal {}", principal_id);
        }
        Ok(())
    }

    /// Deletes every refresh token that expired before `now`
    ///
    /// Records that disappear between the scan and the delete (consumed by a
    /// concurrent rotation) are skipped without error and excluded from the
    /// count.
    ///
    /// # Arguments
    ///
    /// * `now` - The expiry cutoff
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of records actually removed
    /// * `Err(AuthError)` - Store failure
    pub async fn remove_expired_refresh_tokens(&self, now: DateTime<Utc>) -> AuthResult<usize> {
        let expired = self.tokens.find_expired_before(now).await?;

        let mut removed = 0;
        for token in &expired {
            if self.tokens.delete(token).await? {
                removed += 1;
            }
        }

        Ok(removed)
    }

    /// Decodes and fully validates a bearer access token
    ///
    /// # Arguments
    ///
    /// * `token` - The JWT access token to validate
    ///
    /// # Returns
    ///
    /// * `Ok(TokenData<Claims>)` - The parsed header and claims
    /// * `Err(AuthError)` - Token is invalid, expired, or malformed
    pub fn decode_token(&self, token: &str) -> AuthResult<TokenData<Claims>> {
        self.codec.decode(token)
    }

    fn generate_refresh_string() -> String {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        rand::thread_rng().fill(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }
}
