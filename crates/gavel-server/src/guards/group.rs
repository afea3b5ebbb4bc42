//! Group-scoped guards

use super::{AuthorizationGuard, require_identity};
use crate::transport::context::RequestContext;
use async_trait::async_trait;
use gavel_domain::error::{Error, Result};
use gavel_domain::roles::GlobalRole;
use gavel_infrastructure::auth::role_lookup::RoleLookupService;

/// Requires any membership in the scoped group
///
/// No group scope means nothing to check. Admins pass without a
/// membership row; everyone else needs one, leader or not.
pub struct GroupMembershipGuard;

#[async_trait]
impl AuthorizationGuard for GroupMembershipGuard {
    fn name(&self) -> &'static str {
        "GroupMembershipGuard"
    }

    async fn authorize(&self, ctx: &RequestContext, roles: &RoleLookupService) -> Result<()> {
        let Some(group_id) = ctx.group_id() else {
            return Ok(());
        };

        let identity = require_identity(ctx, self.name())?;
        if roles.global_role(identity).await?.satisfies(GlobalRole::Admin) {
            return Ok(());
        }

        match roles.group_membership(identity.id, group_id).await? {
            Some(_) => Ok(()),
            None => Err(Error::forbidden(format!("not a member of group {group_id}"))),
        }
    }
}

/// Requires leadership of the scoped group
///
/// Same precondition chain as [`GroupMembershipGuard`], but the
/// membership row must carry the leader flag. Handlers that declare
/// "leader not needed" bypass the guard entirely.
pub struct GroupLeaderGuard {
    leader_required: bool,
}

impl GroupLeaderGuard {
    /// Guard that demands leadership
    pub fn new() -> Self {
        Self {
            leader_required: true,
        }
    }

    /// Handler-level bypass ("leader not needed")
    pub fn bypassed() -> Self {
        Self {
            leader_required: false,
        }
    }
}

impl Default for GroupLeaderGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorizationGuard for GroupLeaderGuard {
    fn name(&self) -> &'static str {
        "GroupLeaderGuard"
    }

    async fn authorize(&self, ctx: &RequestContext, roles: &RoleLookupService) -> Result<()> {
        if !self.leader_required {
            return Ok(());
        }

        let Some(group_id) = ctx.group_id() else {
            return Ok(());
        };

        let identity = require_identity(ctx, self.name())?;
        if roles.global_role(identity).await?.satisfies(GlobalRole::Admin) {
            return Ok(());
        }

        match roles.group_membership(identity.id, group_id).await? {
            Some(membership) if membership.is_group_leader => Ok(()),
            Some(_) => Err(Error::forbidden(format!(
                "not a leader of group {group_id}"
            ))),
            None => Err(Error::forbidden(format!("not a member of group {group_id}"))),
        }
    }
}
