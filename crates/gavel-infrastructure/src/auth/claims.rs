//! JWT claims structure
//!
//! Wire payload for both token kinds. Access and refresh tokens share one
//! shape and one signing secret; only their expirations differ.

use gavel_domain::value_objects::session::TokenClaims;
use jsonwebtoken::get_current_timestamp;
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: i64,
    /// Username at issuance
    pub username: String,
    /// Issued at timestamp
    pub iat: u64,
    /// Expiration timestamp
    pub exp: u64,
    /// Issuer
    pub iss: String,
    /// Unique token id; keeps two tokens minted in the same second distinct
    pub jti: String,
}

impl Claims {
    /// Create claims for a user with the given lifetime
    pub fn new(user_id: i64, username: impl Into<String>, issuer: &str, ttl_secs: u64) -> Self {
        let now = get_current_timestamp();

        Self {
            sub: user_id,
            username: username.into(),
            iat: now,
            exp: now + ttl_secs,
            iss: issuer.to_string(),
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Check whether the token has expired
    pub fn is_expired(&self) -> bool {
        self.exp < get_current_timestamp()
    }

    /// Remaining validity in seconds (0 if expired)
    pub fn remaining_secs(&self) -> u64 {
        self.exp.saturating_sub(get_current_timestamp())
    }
}

impl From<Claims> for TokenClaims {
    fn from(claims: Claims) -> Self {
        TokenClaims {
            user_id: claims.sub,
            username: claims.username,
        }
    }
}
