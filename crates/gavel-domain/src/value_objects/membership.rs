//! Membership facts read from the persistence collaborator
//!
//! These rows are owned by the external database; this core only reads
//! them to make policy decisions.

use crate::roles::{ContestRole, GlobalRole};
use serde::{Deserialize, Serialize};

/// One row per (user, group)
///
/// Leadership is a boolean flag, not a rank: "leader" and "member" are the
/// only two states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembership {
    /// Member user id
    pub user_id: i64,
    /// Group id
    pub group_id: i64,
    /// Whether this member leads the group
    pub is_group_leader: bool,
}

/// One row per (user, contest)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestMembership {
    /// Member user id
    pub user_id: i64,
    /// Contest id
    pub contest_id: i64,
    /// Role held within this contest
    pub role: ContestRole,
}

/// Explicit management capabilities on a user's role record
///
/// Consumed by the manager capability union; independent of any scope id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCapabilities {
    /// May create courses anywhere on the platform
    pub can_create_course: bool,
    /// May create contests anywhere on the platform
    pub can_create_contest: bool,
}

impl UserCapabilities {
    /// Whether any management capability is set
    pub fn any(&self) -> bool {
        self.can_create_course || self.can_create_contest
    }
}

/// User row as stored by the persistence collaborator
///
/// Only the facts this core needs: identity, credential hash, role, and
/// capability flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user id
    pub id: i64,
    /// Unique username
    pub username: String,
    /// Argon2id PHC-format password hash
    #[serde(skip)]
    pub password_hash: String,
    /// System-wide role
    pub global_role: GlobalRole,
    /// Management capability flags
    pub capabilities: UserCapabilities,
}
