//! JWT token service and refresh-session lifecycle
//!
//! Issues, verifies, rotates, and revokes the signed access/refresh pair.
//! Both token kinds are signed with one shared secret (HS256) and differ
//! only in lifetime. Trust in a refresh token is held in a single
//! per-user session slot in the shared cache; `issue` overwrites that
//! slot, so rotation implicitly invalidates the token it consumed.

use crate::auth::claims::Claims;
use crate::config::JwtConfig;
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use gavel_domain::constants::refresh_session_key;
use gavel_domain::error::{Error, Result};
use gavel_domain::ports::cache::{CacheEntryConfig, CacheProvider};
use gavel_domain::ports::token::TokenAuthority;
use gavel_domain::value_objects::session::{RefreshSession, TokenClaims, TokenPair};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation, decode, encode};
use std::sync::Arc;
use tracing::debug;

/// Token service backed by `jsonwebtoken` and the shared cache
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    access_ttl_secs: u64,
    refresh_ttl_secs: u64,
    cache: Arc<dyn CacheProvider>,
}

impl JwtTokenService {
    /// Create a token service from JWT configuration and a cache
    pub fn new(config: &JwtConfig, cache: Arc<dyn CacheProvider>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Zero leeway: an expired token is expired, full stop.
        validation.leeway = 0;
        validation.set_issuer(&[&config.issuer]);
        validation.set_required_spec_claims(&["exp", "iss"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            issuer: config.issuer.clone(),
            access_ttl_secs: config.access_expiration_secs,
            refresh_ttl_secs: config.refresh_expiration_secs,
            cache,
        }
    }

    /// Access token lifetime in seconds
    pub fn access_ttl_secs(&self) -> u64 {
        self.access_ttl_secs
    }

    /// Refresh token lifetime in seconds; also the cookie max-age source
    pub fn refresh_ttl_secs(&self) -> u64 {
        self.refresh_ttl_secs
    }

    fn sign(&self, user_id: i64, username: &str, ttl_secs: u64) -> Result<String> {
        let claims = Claims::new(user_id, username, &self.issuer, ttl_secs);
        encode(&jsonwebtoken::Header::default(), &claims, &self.encoding_key)
            .map_err(|e| Error::internal(format!("Token signing failed: {e}")))
    }

    fn decode_claims(&self, token: &str) -> Result<Claims> {
        // Signature failure, expiry, and malformed payloads all collapse
        // into the one opaque credential error.
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| Error::invalid_token())
    }

    async fn read_session_slot(&self, user_id: i64) -> Result<Option<RefreshSession>> {
        let key = refresh_session_key(user_id);
        match self.cache.get_json(&key).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl TokenAuthority for JwtTokenService {
    async fn issue(&self, user_id: i64, username: &str) -> Result<TokenPair> {
        let access_token = self.sign(user_id, username, self.access_ttl_secs)?;
        let refresh_token = self.sign(user_id, username, self.refresh_ttl_secs)?;

        let session = RefreshSession {
            user_id,
            token_value: refresh_token.clone(),
            expires_at: Utc::now() + ChronoDuration::seconds(self.refresh_ttl_secs as i64),
        };

        // The only write path that establishes trust in a refresh token.
        // One slot per user: this overwrite withdraws trust from whatever
        // token the slot held before.
        self.cache
            .set_json(
                &refresh_session_key(user_id),
                &serde_json::to_string(&session)?,
                CacheEntryConfig::default().with_ttl_secs(self.refresh_ttl_secs),
            )
            .await?;

        debug!(user_id, "Issued token pair and refreshed session slot");

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    fn verify(&self, token: &str) -> Result<TokenClaims> {
        self.decode_claims(token).map(TokenClaims::from)
    }

    async fn rotate(&self, presented_refresh_token: &str) -> Result<TokenPair> {
        let claims = self.decode_claims(presented_refresh_token)?;

        // Syntactic validity is not enough: the token must also be the one
        // the session slot currently trusts. A token superseded by rotation
        // or removed by logout fails here.
        let session = self
            .read_session_slot(claims.sub)
            .await?
            .ok_or_else(Error::invalid_token)?;

        if !session.trusts(presented_refresh_token) {
            debug!(user_id = claims.sub, "Rejected unidentified refresh token");
            return Err(Error::invalid_token());
        }

        // Read-then-write: two concurrent rotations of the same token can
        // both reach this point and both issue; the last slot write wins
        // and the loser's new refresh token dies on its first use. Accepted
        // race - rotation is rare and the fallout is a re-login.
        self.issue(claims.sub, &claims.username).await
    }

    async fn revoke(&self, user_id: i64) -> Result<()> {
        let deleted = self.cache.delete(&refresh_session_key(user_id)).await?;
        if !deleted {
            return Err(Error::session_conflict(format!(
                "no active refresh session for user {user_id}"
            )));
        }
        debug!(user_id, "Revoked refresh session");
        Ok(())
    }
}
