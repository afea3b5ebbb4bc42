//! Authentication gate
//!
//! The single entry decision: does this handler need a verified identity,
//! and does the presented credential provide one? Scope presence upgrades
//! otherwise-public handlers to strict authentication so unauthenticated
//! callers cannot read scoped data by guessing an id.

use crate::transport::context::RequestContext;
use gavel_domain::error::{Error, Result};
use gavel_domain::ports::token::TokenAuthority;
use gavel_domain::value_objects::identity::Identity;
use std::sync::Arc;
use tracing::trace;

/// What a handler declares about authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    /// A verified identity is mandatory
    Required,
    /// Public unless a scope id is present; never verifies otherwise
    Public,
    /// Best-effort: verify if possible, proceed anonymously on failure
    ///
    /// Used for personalization on read endpoints. A scope id still
    /// forces strict verification.
    SoftAuth,
}

/// Resolves the request identity according to the handler's declaration
pub struct AuthenticationGate {
    tokens: Arc<dyn TokenAuthority>,
}

impl AuthenticationGate {
    /// Create a gate over the token authority
    pub fn new(tokens: Arc<dyn TokenAuthority>) -> Self {
        Self { tokens }
    }

    /// Populate `ctx` with a verified identity, an explicit null identity,
    /// or reject with `Unauthorized`
    pub fn authenticate(
        &self,
        requirement: AuthRequirement,
        ctx: &mut RequestContext,
    ) -> Result<()> {
        let verified = ctx
            .bearer()
            .map(|token| self.tokens.verify(token))
            .transpose();

        match requirement {
            AuthRequirement::Required => {
                let claims = verified?.ok_or_else(Error::invalid_token)?;
                ctx.set_identity(Some(Identity::new(claims.user_id, claims.username)));
            }
            AuthRequirement::Public => {
                if ctx.has_scope() {
                    // Scope presence revokes the public bypass.
                    let claims = verified?.ok_or_else(Error::invalid_token)?;
                    ctx.set_identity(Some(Identity::new(claims.user_id, claims.username)));
                } else {
                    trace!("public handler without scope; proceeding anonymously");
                    ctx.set_identity(None);
                }
            }
            AuthRequirement::SoftAuth => match verified {
                Ok(Some(claims)) => {
                    ctx.set_identity(Some(Identity::new(claims.user_id, claims.username)));
                }
                Ok(None) | Err(_) if ctx.has_scope() => {
                    return Err(Error::invalid_token());
                }
                Ok(None) | Err(_) => {
                    trace!("soft-auth credential unusable; proceeding anonymously");
                    ctx.set_identity(None);
                }
            },
        }

        Ok(())
    }
}
