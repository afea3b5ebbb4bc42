//! Token and session value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed pair handed out on login and rotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived token presented as the bearer credential
    pub access_token: String,
    /// Long-lived token presented only to the reissue endpoint
    pub refresh_token: String,
}

/// Verified token payload, transport- and format-agnostic
///
/// What the gate receives from a successful verification; the wire-level
/// JWT claims live in the infrastructure layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id the token was issued for
    pub user_id: i64,
    /// Username at issuance time
    pub username: String,
}

/// The refresh session slot as stored in the shared cache
///
/// At most one per user. Validity of a presented refresh token is decided
/// solely by whether it matches the slot value that still exists - there
/// is no revocation list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshSession {
    /// Owner of the session
    pub user_id: i64,
    /// The one currently trusted refresh token value
    pub token_value: String,
    /// When the slot's cache entry expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshSession {
    /// Whether `presented` is the currently trusted token for this slot
    pub fn trusts(&self, presented: &str) -> bool {
        self.token_value == presented
    }
}
