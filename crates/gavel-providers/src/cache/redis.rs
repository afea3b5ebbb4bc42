//! Redis distributed cache provider
//!
//! Distributed backend for multi-instance deployments. Per-entry TTL maps
//! onto Redis key expiry, so the session slot disappears server-side when
//! the refresh token it holds would no longer verify anyway.

use async_trait::async_trait;
use gavel_domain::error::{Error, Result};
use gavel_domain::ports::cache::{CacheEntryConfig, CacheProvider};
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};

/// Redis cache provider
///
/// Uses a multiplexed connection for efficient connection reuse.
#[derive(Debug, Clone)]
pub struct RedisCacheProvider {
    client: Client,
}

impl RedisCacheProvider {
    /// Create a provider from a connection URL (e.g. `redis://localhost:6379`)
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| Error::Cache {
            message: format!("Failed to create Redis client: {e}"),
            source: Some(Box::new(e)),
        })?;

        Ok(Self { client })
    }

    /// Create a provider from host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{host}:{port}"))
    }

    async fn connection(&self) -> Result<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::Cache {
                message: format!("Failed to get Redis connection: {e}"),
                source: Some(Box::new(e)),
            })
    }
}

fn wrap(e: redis::RedisError, what: &str) -> Error {
    Error::Cache {
        message: format!("Redis {what} failed: {e}"),
        source: Some(Box::new(e)),
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let mut con = self.connection().await?;
        con.get(key).await.map_err(|e| wrap(e, "GET"))
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let mut con = self.connection().await?;
        let ttl_secs = config.effective_ttl().as_secs();
        con.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| wrap(e, "SETEX"))
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut con = self.connection().await?;
        let removed: u64 = con.del(key).await.map_err(|e| wrap(e, "DEL"))?;
        Ok(removed > 0)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut con = self.connection().await?;
        con.exists(key).await.map_err(|e| wrap(e, "EXISTS"))
    }

    async fn clear(&self) -> Result<()> {
        let mut con = self.connection().await?;
        redis::cmd("FLUSHDB")
            .query_async::<()>(&mut con)
            .await
            .map_err(|e| wrap(e, "FLUSHDB"))
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}
