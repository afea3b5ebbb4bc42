//! Cache Provider Port
//!
//! Port for the shared cache backing the refresh-session store. Supports
//! in-memory (Moka), distributed (Redis), and null providers; the session
//! store is the only writer in this core.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Default TTL for cache entries (5 minutes)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Per-entry cache configuration
///
/// # Example
///
/// ```ignore
/// let config = CacheEntryConfig::default().with_ttl(Duration::from_secs(600));
/// ```
#[derive(Debug, Clone)]
pub struct CacheEntryConfig {
    /// Time to live for the cache entry
    pub ttl: Option<Duration>,
}

impl CacheEntryConfig {
    /// Create a config with the default TTL
    pub fn new() -> Self {
        Self {
            ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
        }
    }

    /// Set the TTL for the cache entry
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set TTL in seconds
    pub fn with_ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = Some(Duration::from_secs(secs));
        self
    }

    /// Effective TTL, falling back to the default
    pub fn effective_ttl(&self) -> Duration {
        self.ttl
            .unwrap_or(Duration::from_secs(DEFAULT_CACHE_TTL_SECS))
    }
}

impl Default for CacheEntryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache Provider Port
///
/// JSON-string storage with per-entry TTL. Expired entries must behave as
/// absent from every read path.
///
/// # Implementations
///
/// - **Moka**: in-memory, single process
/// - **Redis**: distributed, multi-instance deployments
/// - **Null**: no-op for tests that want every lookup to miss
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get a value as a JSON string; `None` if absent or expired
    async fn get_json(&self, key: &str) -> Result<Option<String>>;

    /// Store a JSON string under `key`, replacing any previous value
    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()>;

    /// Delete a key; returns whether the key existed
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Whether `key` exists and has not expired
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Remove every entry (test support)
    async fn clear(&self) -> Result<()>;

    /// Identifier of the backing implementation ("moka", "redis", "null")
    fn provider_name(&self) -> &str;
}
