//! Domain layer constants
//!
//! Infrastructure-specific constants (config file names, header names)
//! live in `gavel_infrastructure::constants`.

/// Error message surfaced for every credential failure.
///
/// Signature failure, expiry, malformed payload, and unknown refresh
/// sessions all collapse into this one message so callers learn nothing
/// about which check rejected them.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid Token";

/// Cache key prefix for the per-user refresh session slot.
pub const REFRESH_SESSION_PREFIX: &str = "auth:refresh";

/// Cache key for a user's refresh session slot.
///
/// One slot per user: writing a new session implicitly withdraws trust
/// from whatever token the slot held before.
pub fn refresh_session_key(user_id: i64) -> String {
    format!("{REFRESH_SESSION_PREFIX}:{user_id}")
}
