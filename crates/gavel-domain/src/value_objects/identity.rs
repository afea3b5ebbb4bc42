//! Per-request identity
//!
//! An [`Identity`] is created from a verified token when a request enters
//! the system and is discarded when the request ends. The global role is
//! not part of the token payload; the first guard that needs it resolves
//! it through the persistence collaborator and memoizes it here so later
//! guards in the same request do not repeat the lookup.

use crate::roles::GlobalRole;
use std::sync::OnceLock;

/// The authenticated principal of one request
///
/// Never shared across requests. The memoized role lives in a [`OnceLock`]
/// so guards can fill it through a shared reference.
#[derive(Debug)]
pub struct Identity {
    /// User id from the verified token
    pub id: i64,
    /// Username from the verified token
    pub username: String,
    /// Lazily resolved global role; set at most once per request
    global_role: OnceLock<GlobalRole>,
}

impl Identity {
    /// Create an identity from a verified token payload
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            global_role: OnceLock::new(),
        }
    }

    /// Create an identity whose role is already known (tests, trusted paths)
    pub fn with_role(id: i64, username: impl Into<String>, role: GlobalRole) -> Self {
        let identity = Self::new(id, username);
        let _ = identity.global_role.set(role);
        identity
    }

    /// The memoized global role, if any guard has resolved it yet
    pub fn cached_role(&self) -> Option<GlobalRole> {
        self.global_role.get().copied()
    }

    /// Memoize the resolved role and return the request-wide winner
    ///
    /// If two lookups race within one request the first write wins; both
    /// callers observe the same role afterwards.
    pub fn memoize_role(&self, role: GlobalRole) -> GlobalRole {
        *self.global_role.get_or_init(|| role)
    }
}

impl Clone for Identity {
    fn clone(&self) -> Self {
        let cloned = Self::new(self.id, self.username.clone());
        if let Some(role) = self.cached_role() {
            let _ = cloned.global_role.set(role);
        }
        cloned
    }
}
