//! Contest-scoped role guard

use super::{AuthorizationGuard, require_identity};
use crate::transport::context::RequestContext;
use async_trait::async_trait;
use gavel_domain::error::{Error, Result};
use gavel_domain::roles::{ContestRole, GlobalRole};
use gavel_infrastructure::auth::role_lookup::RoleLookupService;

/// Requires a contest membership at or above a threshold
///
/// Super admins supersede all contest scoping and pass with no membership
/// row at all. The [`ContestRole`] hierarchy is independent of the global
/// one; the default threshold is the lowest rank ("any participant").
pub struct ContestRoleGuard {
    threshold: ContestRole,
    roles_needed: bool,
}

impl ContestRoleGuard {
    /// Guard demanding at least `threshold` within the scoped contest
    pub fn new(threshold: ContestRole) -> Self {
        Self {
            threshold,
            roles_needed: true,
        }
    }

    /// Guard with the default threshold (any participant)
    pub fn any_participant() -> Self {
        Self::new(ContestRole::default())
    }

    /// Handler-level bypass ("contest roles not needed")
    pub fn bypassed() -> Self {
        Self {
            threshold: ContestRole::default(),
            roles_needed: false,
        }
    }
}

#[async_trait]
impl AuthorizationGuard for ContestRoleGuard {
    fn name(&self) -> &'static str {
        "ContestRoleGuard"
    }

    async fn authorize(&self, ctx: &RequestContext, roles: &RoleLookupService) -> Result<()> {
        if !self.roles_needed {
            return Ok(());
        }

        let Some(contest_id) = ctx.contest_id() else {
            return Ok(());
        };

        let identity = require_identity(ctx, self.name())?;
        if roles
            .global_role(identity)
            .await?
            .satisfies(GlobalRole::SuperAdmin)
        {
            return Ok(());
        }

        let Some(membership) = roles.contest_membership(identity.id, contest_id).await? else {
            return Err(Error::forbidden(format!(
                "not registered in contest {contest_id}"
            )));
        };

        if membership.role.satisfies(self.threshold) {
            Ok(())
        } else {
            Err(Error::forbidden(format!(
                "contest role {:?} does not satisfy {:?}",
                membership.role, self.threshold
            )))
        }
    }
}
