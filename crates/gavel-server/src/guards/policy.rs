//! Route policies and the engine that evaluates them

use super::{AuthRequirement, AuthenticationGate, AuthorizationGuard};
use crate::transport::context::RequestContext;
use gavel_domain::error::Result;
use gavel_infrastructure::auth::role_lookup::RoleLookupService;
use std::sync::Arc;
use tracing::debug;

/// Declarative authorization policy for one route
///
/// The gate requirement runs first; guards run in declaration order and
/// the first denial wins. Handlers compose policies instead of calling
/// guards directly, keeping the decision identical across transports.
#[derive(Clone)]
pub struct RoutePolicy {
    auth: AuthRequirement,
    guards: Vec<Arc<dyn AuthorizationGuard>>,
}

impl RoutePolicy {
    /// Mandatory verified identity, no further guards yet
    pub fn authenticated() -> Self {
        Self {
            auth: AuthRequirement::Required,
            guards: Vec::new(),
        }
    }

    /// Anonymous access unless a scope id is present
    pub fn public() -> Self {
        Self {
            auth: AuthRequirement::Public,
            guards: Vec::new(),
        }
    }

    /// Best-effort identity resolution
    pub fn soft() -> Self {
        Self {
            auth: AuthRequirement::SoftAuth,
            guards: Vec::new(),
        }
    }

    /// Append a guard; guards evaluate in the order added
    pub fn with_guard(mut self, guard: Arc<dyn AuthorizationGuard>) -> Self {
        self.guards.push(guard);
        self
    }

    /// The gate requirement this policy declares
    pub fn auth(&self) -> AuthRequirement {
        self.auth
    }
}

/// Evaluates route policies: gate first, then each guard in order
pub struct PolicyEngine {
    gate: AuthenticationGate,
    roles: RoleLookupService,
}

impl PolicyEngine {
    /// Create an engine over the gate and role lookup collaborators
    pub fn new(gate: AuthenticationGate, roles: RoleLookupService) -> Self {
        Self { gate, roles }
    }

    /// Role lookup service shared with handlers
    pub fn roles(&self) -> &RoleLookupService {
        &self.roles
    }

    /// Run the full decision for one request
    ///
    /// On success the context carries the resolved identity (possibly
    /// null for public/soft routes). The first failing step decides the
    /// error: `Unauthorized` from the gate, `Forbidden` from a guard.
    pub async fn authorize(&self, policy: &RoutePolicy, ctx: &mut RequestContext) -> Result<()> {
        self.gate.authenticate(policy.auth, ctx)?;

        for guard in &policy.guards {
            if let Err(err) = guard.authorize(ctx, &self.roles).await {
                debug!(guard = guard.name(), %err, "guard denied request");
                return Err(err);
            }
        }

        Ok(())
    }
}
