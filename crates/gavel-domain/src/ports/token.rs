//! Token Authority Port
//!
//! Contract for issuing, verifying, rotating, and revoking the signed
//! access/refresh token pair together with the per-user refresh session
//! slot.

use crate::error::Result;
use crate::value_objects::session::{TokenClaims, TokenPair};
use async_trait::async_trait;

/// Session lifecycle over signed token pairs
///
/// State machine per user: `Anonymous -> Authenticated(pair) ->
/// Authenticated(rotated) -> Revoked`. `issue` is the only write path
/// that establishes trust in a refresh token.
#[async_trait]
pub trait TokenAuthority: Send + Sync {
    /// Sign a fresh access/refresh pair and overwrite the user's session slot
    async fn issue(&self, user_id: i64, username: &str) -> Result<TokenPair>;

    /// Verify a token's signature, expiry, and payload shape
    ///
    /// All failure modes collapse into one `Unauthorized` - callers must
    /// not be able to tell which check rejected the token.
    fn verify(&self, token: &str) -> Result<TokenClaims>;

    /// Exchange a trusted refresh token for a fresh pair
    ///
    /// Verifies the token, then requires it to match the session slot;
    /// success re-issues, implicitly invalidating the presented token.
    async fn rotate(&self, presented_refresh_token: &str) -> Result<TokenPair>;

    /// Delete the user's session slot
    ///
    /// Deleting an absent slot fails with the soft `SessionConflict`
    /// signal; callers treat that as success (idempotent logout).
    async fn revoke(&self, user_id: i64) -> Result<()>;
}
