//! Aggregate "can manage something" guard

use super::{AuthorizationGuard, require_identity};
use crate::transport::context::RequestContext;
use async_trait::async_trait;
use gavel_domain::error::{Error, Result};
use gavel_domain::roles::{ContestRole, GlobalRole};
use gavel_infrastructure::auth::role_lookup::RoleLookupService;

/// Passes anyone holding management authority anywhere in the system
///
/// Checks run cheapest-first and short-circuit on the first grant:
/// global admin, then capability flags, then any led group, then any
/// contest managed at [`ContestRole::Manager`] or above. Used by
/// management console routes that list resources across scopes.
pub struct ManagerGuard;

#[async_trait]
impl AuthorizationGuard for ManagerGuard {
    fn name(&self) -> &'static str {
        "ManagerGuard"
    }

    async fn authorize(&self, ctx: &RequestContext, roles: &RoleLookupService) -> Result<()> {
        let identity = require_identity(ctx, self.name())?;

        if roles
            .global_role(identity)
            .await?
            .satisfies(GlobalRole::Admin)
        {
            return Ok(());
        }
        if roles.capabilities(identity.id).await?.any() {
            return Ok(());
        }
        if roles.find_any_leading_group(identity.id).await?.is_some() {
            return Ok(());
        }
        if roles
            .find_any_contest_role_at_least(identity.id, ContestRole::Manager)
            .await?
            .is_some()
        {
            return Ok(());
        }

        Err(Error::forbidden("no management authority"))
    }
}
