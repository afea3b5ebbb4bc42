//! Role Lookup Port
//!
//! Read-only contract against the persistence collaborator for the
//! identity and membership facts authorization needs. No caching happens
//! behind this port; callers memoize the global role onto the per-request
//! identity to bound lookups.

use crate::error::Result;
use crate::roles::{ContestRole, GlobalRole};
use crate::value_objects::membership::{ContestMembership, GroupMembership, UserCapabilities};
use async_trait::async_trait;

/// Persistence reads used by the guard family
#[async_trait]
pub trait RoleLookupProvider: Send + Sync {
    /// The user's system-wide role
    ///
    /// Fails with `NotFound` when the user row is missing - fatal, since
    /// no policy decision is meaningful without an identity.
    async fn global_role(&self, user_id: i64) -> Result<GlobalRole>;

    /// Membership row for (user, group), if any
    async fn group_membership(&self, user_id: i64, group_id: i64)
    -> Result<Option<GroupMembership>>;

    /// Membership row for (user, contest), if any
    async fn contest_membership(
        &self,
        user_id: i64,
        contest_id: i64,
    ) -> Result<Option<ContestMembership>>;

    /// Any group this user leads, if one exists
    async fn find_any_leading_group(&self, user_id: i64) -> Result<Option<GroupMembership>>;

    /// Any contest membership at or above `threshold`, if one exists
    async fn find_any_contest_role_at_least(
        &self,
        user_id: i64,
        threshold: ContestRole,
    ) -> Result<Option<ContestMembership>>;

    /// Management capability flags on the user's role record
    async fn capabilities(&self, user_id: i64) -> Result<UserCapabilities>;
}
