//! Cache providers
//!
//! Backends behind the [`CacheProvider`] port. The factory picks one from
//! configuration; the refresh-session store is the only writer in this
//! system.

pub mod moka;
pub mod null;
pub mod redis;

pub use moka::MokaCacheProvider;
pub use null::NullCacheProvider;
pub use redis::RedisCacheProvider;

use gavel_domain::error::{Error, Result};
use gavel_domain::ports::cache::CacheProvider;
use gavel_infrastructure::config::CacheConfig;
use gavel_infrastructure::config::data::CacheBackend;
use std::sync::Arc;
use std::time::Duration;

/// Create a cache provider from configuration
pub fn create_cache_provider(config: &CacheConfig) -> Result<Arc<dyn CacheProvider>> {
    match config.backend {
        CacheBackend::Moka => Ok(Arc::new(MokaCacheProvider::with_config(
            config.max_entries,
            Duration::from_secs(config.default_ttl_secs),
        ))),
        CacheBackend::Redis => {
            let url = config.redis_url.as_deref().ok_or_else(|| Error::Config {
                message: "cache.redis_url is required for the redis backend".to_string(),
                source: None,
            })?;
            Ok(Arc::new(RedisCacheProvider::new(url)?))
        }
        CacheBackend::Null => Ok(Arc::new(NullCacheProvider::new())),
    }
}
