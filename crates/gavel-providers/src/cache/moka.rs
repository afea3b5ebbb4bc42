//! Moka in-memory cache provider
//!
//! Single-process cache built on Moka. Each entry carries its own
//! expiration so short-lived entries can expire before the cache-wide
//! backstop TTL does.

use async_trait::async_trait;
use chrono::Utc;
use gavel_domain::error::Result;
use gavel_domain::ports::cache::{CacheEntryConfig, CacheProvider};
use moka::future::Cache;
use std::time::Duration;

/// Default capacity when none is configured
const DEFAULT_MAX_ENTRIES: u64 = 100_000;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    /// Unix seconds after which the entry is dead even if Moka kept it
    expires_at: u64,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at < Utc::now().timestamp() as u64
    }
}

/// Moka-based in-memory cache provider
#[derive(Debug, Clone)]
pub struct MokaCacheProvider {
    cache: Cache<String, Entry>,
}

impl Default for MokaCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheProvider {
    /// Create a provider with default capacity and no backstop TTL
    pub fn new() -> Self {
        let cache = Cache::builder().max_capacity(DEFAULT_MAX_ENTRIES).build();
        Self { cache }
    }

    /// Create a provider with explicit capacity and backstop TTL
    ///
    /// The backstop TTL bounds how long Moka retains an entry; the
    /// per-entry expiration recorded at write time is what decides
    /// visibility on reads.
    pub fn with_config(max_entries: u64, time_to_live: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(time_to_live)
            .build();
        Self { cache }
    }
}

#[async_trait]
impl CacheProvider for MokaCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        match self.cache.get(key).await {
            Some(entry) if entry.is_expired() => {
                self.cache.invalidate(key).await;
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value)),
            None => Ok(None),
        }
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: Utc::now().timestamp() as u64 + config.effective_ttl().as_secs(),
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let existed = match self.cache.get(key).await {
            Some(entry) => !entry.is_expired(),
            None => false,
        };
        self.cache.invalidate(key).await;
        Ok(existed)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get_json(key).await?.is_some())
    }

    async fn clear(&self) -> Result<()> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}
