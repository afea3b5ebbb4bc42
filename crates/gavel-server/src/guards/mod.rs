//! Authentication gate and scoped authorization guards
//!
//! The gate runs first and resolves (or explicitly nulls) the identity;
//! the guards run after it and each encode one policy. A null identity
//! denies every guard below unless the guard itself is configured as
//! bypassable. Guards report denials as `Forbidden`; only the gate ever
//! produces `Unauthorized`.

pub mod contest;
pub mod gate;
pub mod group;
pub mod manager;
pub mod policy;
pub mod role;

pub use contest::ContestRoleGuard;
pub use gate::{AuthRequirement, AuthenticationGate};
pub use group::{GroupLeaderGuard, GroupMembershipGuard};
pub use manager::ManagerGuard;
pub use policy::{PolicyEngine, RoutePolicy};
pub use role::{AdminGuard, RoleGuard};

use crate::transport::context::RequestContext;
use async_trait::async_trait;
use gavel_domain::error::{Error, Result};
use gavel_domain::value_objects::identity::Identity;
use gavel_infrastructure::auth::role_lookup::RoleLookupService;

/// One authorization policy, evaluated against the normalized context
#[async_trait]
pub trait AuthorizationGuard: Send + Sync {
    /// Guard name for logs and denial messages
    fn name(&self) -> &'static str;

    /// Allow (`Ok`) or deny (`Err(Forbidden)`) the request
    async fn authorize(&self, ctx: &RequestContext, roles: &RoleLookupService) -> Result<()>;
}

/// The resolved identity, or the uniform denial for anonymous callers
pub(crate) fn require_identity<'c>(ctx: &'c RequestContext, guard: &str) -> Result<&'c Identity> {
    ctx.identity()
        .ok_or_else(|| Error::forbidden(format!("{guard}: authenticated identity required")))
}
