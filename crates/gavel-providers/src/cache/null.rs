//! Null cache provider for testing
//!
//! Stores nothing; every read misses. With this backend every refresh
//! token presented for rotation is rejected, which is exactly what some
//! negative-path tests want.

use async_trait::async_trait;
use gavel_domain::error::Result;
use gavel_domain::ports::cache::{CacheEntryConfig, CacheProvider};

/// Cache provider that never stores anything
#[derive(Debug, Clone, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Create a new null cache provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheProvider for NullCacheProvider {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_json(&self, _key: &str, _value: &str, _config: CacheEntryConfig) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
