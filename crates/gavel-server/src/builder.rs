//! Server assembly
//!
//! Wires the cache, identity and token collaborators into the shared
//! [`AppContext`] that Rocket manages. Tests swap collaborators through
//! the builder; production uses the config-driven defaults.

use crate::guards::gate::AuthenticationGate;
use crate::guards::policy::PolicyEngine;
use gavel_domain::error::Result;
use gavel_domain::ports::cache::CacheProvider;
use gavel_domain::ports::role_lookup::RoleLookupProvider;
use gavel_domain::ports::token::TokenAuthority;
use gavel_domain::ports::user_directory::UserDirectory;
use gavel_infrastructure::auth::role_lookup::RoleLookupService;
use gavel_infrastructure::auth::token_service::JwtTokenService;
use gavel_infrastructure::config::data::AppConfig;
use gavel_providers::cache::create_cache_provider;
use gavel_providers::identity::memory::MemoryIdentityProvider;
use std::sync::Arc;
use tracing::info;

/// Shared application state managed by Rocket
pub struct AppContext {
    /// Loaded and validated configuration
    pub config: AppConfig,
    /// Token issuance, verification, rotation and revocation
    pub tokens: Arc<JwtTokenService>,
    /// User table reads for login
    pub users: Arc<dyn UserDirectory>,
    /// Gate-then-guards policy evaluation
    pub engine: PolicyEngine,
}

/// Builds an [`AppContext`] from configuration plus optional overrides
pub struct ServerBuilder {
    config: AppConfig,
    cache: Option<Arc<dyn CacheProvider>>,
    roles: Option<Arc<dyn RoleLookupProvider>>,
    users: Option<Arc<dyn UserDirectory>>,
}

impl ServerBuilder {
    /// Start from a loaded configuration
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            cache: None,
            roles: None,
            users: None,
        }
    }

    /// Override the refresh-session cache
    pub fn with_cache(mut self, cache: Arc<dyn CacheProvider>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Override the role lookup source
    pub fn with_role_lookup(mut self, roles: Arc<dyn RoleLookupProvider>) -> Self {
        self.roles = Some(roles);
        self
    }

    /// Override the user directory
    pub fn with_user_directory(mut self, users: Arc<dyn UserDirectory>) -> Self {
        self.users = Some(users);
        self
    }

    /// Use one in-memory provider for both role lookups and the user table
    pub fn with_identity_provider(mut self, provider: Arc<MemoryIdentityProvider>) -> Self {
        self.roles = Some(provider.clone());
        self.users = Some(provider);
        self
    }

    /// Assemble the application context
    pub fn build(self) -> Result<AppContext> {
        let cache = match self.cache {
            Some(cache) => cache,
            None => create_cache_provider(&self.config.cache)?,
        };
        info!(cache = cache.provider_name(), "refresh-session cache ready");

        let (roles, users) = match (self.roles, self.users) {
            (Some(roles), Some(users)) => (roles, users),
            (roles, users) => {
                let fallback = Arc::new(MemoryIdentityProvider::new());
                (
                    roles.unwrap_or_else(|| fallback.clone() as Arc<dyn RoleLookupProvider>),
                    users.unwrap_or(fallback as Arc<dyn UserDirectory>),
                )
            }
        };

        let tokens = Arc::new(JwtTokenService::new(&self.config.auth.jwt, cache));
        let gate = AuthenticationGate::new(tokens.clone() as Arc<dyn TokenAuthority>);
        let engine = PolicyEngine::new(gate, RoleLookupService::new(roles));

        Ok(AppContext {
            config: self.config,
            tokens,
            users,
            engine,
        })
    }
}
