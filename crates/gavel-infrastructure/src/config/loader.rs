//! Configuration loader
//!
//! Loads configuration from defaults, a TOML file, and environment
//! variables, then validates the result.

use crate::config::AppConfig;
use crate::config::data::CacheBackend;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use gavel_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if present)
    /// 3. Environment variables with prefix (e.g. `GAVEL_SERVER_PORT`)
    /// 4. `JWT_SECRET` as a direct alias for `auth.jwt.secret`
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Underscore-separated nested keys, e.g. GAVEL_AUTH_JWT_SECRET
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        let mut app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        // JWT_SECRET is the documented deployment knob and wins over all
        // other sources.
        if let Ok(secret) = env::var(JWT_SECRET_ENV) {
            app_config.auth.jwt.secret = secret;
        }

        self.validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Reload configuration (useful for hot-reloading)
    pub fn reload(&self) -> Result<AppConfig> {
        self.load()
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }

    /// Validate configuration values
    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        validate_app_config(config)
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_auth_config(config)?;
    validate_cache_config(config)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::Config {
            message: "Server port cannot be 0".to_string(),
            source: None,
        });
    }
    Ok(())
}

fn validate_auth_config(config: &AppConfig) -> Result<()> {
    let jwt = &config.auth.jwt;
    if jwt.secret.is_empty() {
        return Err(Error::Config {
            message: format!("JWT secret must be configured (set {JWT_SECRET_ENV})"),
            source: None,
        });
    }
    if jwt.secret.len() < JWT_SECRET_MIN_LENGTH {
        return Err(Error::Config {
            message: format!("JWT secret must be at least {JWT_SECRET_MIN_LENGTH} characters"),
            source: None,
        });
    }
    if jwt.access_expiration_secs == 0 || jwt.refresh_expiration_secs == 0 {
        return Err(Error::Config {
            message: "Token expirations cannot be 0".to_string(),
            source: None,
        });
    }
    if jwt.access_expiration_secs >= jwt.refresh_expiration_secs {
        return Err(Error::Config {
            message: "Access token lifetime must be shorter than refresh token lifetime"
                .to_string(),
            source: None,
        });
    }
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    if config.cache.default_ttl_secs == 0 {
        return Err(Error::Config {
            message: "Cache TTL cannot be 0".to_string(),
            source: None,
        });
    }
    if config.cache.backend == CacheBackend::Redis && config.cache.redis_url.is_none() {
        return Err(Error::Config {
            message: "cache.redis_url is required when the redis backend is selected".to_string(),
            source: None,
        });
    }
    Ok(())
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
