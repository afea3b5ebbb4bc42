//! Global-role guards

use super::{AuthorizationGuard, require_identity};
use crate::transport::context::RequestContext;
use async_trait::async_trait;
use gavel_domain::error::{Error, Result};
use gavel_domain::roles::GlobalRole;
use gavel_infrastructure::auth::role_lookup::RoleLookupService;

/// Requires the identity's global role to meet a threshold
///
/// The looked-up role is memoized onto the identity, so a chain of role
/// guards costs one persistence read per request.
pub struct RoleGuard {
    threshold: GlobalRole,
}

impl RoleGuard {
    /// Guard with the given role threshold
    pub fn new(threshold: GlobalRole) -> Self {
        Self { threshold }
    }
}

#[async_trait]
impl AuthorizationGuard for RoleGuard {
    fn name(&self) -> &'static str {
        "RoleGuard"
    }

    async fn authorize(&self, ctx: &RequestContext, roles: &RoleLookupService) -> Result<()> {
        let identity = require_identity(ctx, self.name())?;
        let role = roles.global_role(identity).await?;
        if role.satisfies(self.threshold) {
            Ok(())
        } else {
            Err(Error::forbidden(format!(
                "global role {role:?} does not satisfy {:?}",
                self.threshold
            )))
        }
    }
}

/// Admin-gated guard with a handler-level relaxation
///
/// Features whose default policy is admin-only attach this guard; a
/// handler that explicitly relaxes the policy declares a threshold below
/// Admin and is allowed unconditionally. Everything else is checked
/// against Admin rank.
pub struct AdminGuard {
    threshold: GlobalRole,
}

impl AdminGuard {
    /// Guard with the handler's declared threshold
    pub fn new(threshold: GlobalRole) -> Self {
        Self { threshold }
    }
}

#[async_trait]
impl AuthorizationGuard for AdminGuard {
    fn name(&self) -> &'static str {
        "AdminGuard"
    }

    async fn authorize(&self, ctx: &RequestContext, roles: &RoleLookupService) -> Result<()> {
        // Declared threshold below Admin means the handler opted out of
        // the admin gate entirely.
        if self.threshold.rank() < GlobalRole::Admin.rank() {
            return Ok(());
        }

        let identity = require_identity(ctx, self.name())?;
        let role = roles.global_role(identity).await?;
        if role.satisfies(GlobalRole::Admin) {
            Ok(())
        } else {
            Err(Error::forbidden(format!(
                "global role {role:?} does not satisfy Admin"
            )))
        }
    }
}
