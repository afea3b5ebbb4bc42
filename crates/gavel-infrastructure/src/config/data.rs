//! Configuration data types

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication settings
    #[serde(default)]
    pub auth: AuthConfig,
    /// Shared cache settings (refresh-session store)
    #[serde(default)]
    pub cache: CacheConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT settings
    #[serde(default)]
    pub jwt: JwtConfig,
}

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Shared signing secret for both token kinds
    ///
    /// **REQUIRED.** Configure via the `JWT_SECRET` environment variable,
    /// `GAVEL_AUTH_JWT_SECRET`, or `auth.jwt.secret` in the config file.
    /// Must be at least 32 characters.
    pub secret: String,

    /// Token issuer claim
    pub issuer: String,

    /// Access token lifetime in seconds
    pub access_expiration_secs: u64,

    /// Refresh token lifetime in seconds; also the session slot TTL
    pub refresh_expiration_secs: u64,
}

/// Returns default JWT configuration with:
/// - Empty secret (MUST be configured; the loader enforces length)
/// - Expirations from infrastructure constants
impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            issuer: DEFAULT_TOKEN_ISSUER.to_string(),
            access_expiration_secs: ACCESS_TOKEN_EXPIRATION_SECS,
            refresh_expiration_secs: REFRESH_TOKEN_EXPIRATION_SECS,
        }
    }
}

/// Cache backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// In-memory cache, single process
    Moka,
    /// Distributed cache for multi-instance deployments
    Redis,
    /// No-op cache (tests only; every session lookup misses)
    Null,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Which backend to use
    pub backend: CacheBackend,
    /// Redis connection URL; required when `backend = "redis"`
    pub redis_url: Option<String>,
    /// In-memory capacity in entries
    pub max_entries: u64,
    /// Default TTL for entries that do not specify one
    pub default_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::Moka,
            redis_url: None,
            max_entries: CACHE_DEFAULT_MAX_ENTRIES,
            default_ttl_secs: CACHE_DEFAULT_TTL_SECS,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON-formatted records
    pub json_format: bool,
    /// Optional file to also log to (daily rotation)
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
