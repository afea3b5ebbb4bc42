//! Configuration management
//!
//! Figment-layered configuration: compiled defaults, then a TOML file,
//! then `GAVEL_*` environment variables, with `JWT_SECRET` honored as a
//! direct alias for the signing key.

pub mod data;
pub mod loader;

pub use data::{AppConfig, AuthConfig, CacheConfig, JwtConfig, LoggingConfig, ServerConfig};
pub use loader::ConfigLoader;
