//! Infrastructure layer for Gavel
//!
//! Configuration loading, structured logging, JWT token services, password
//! hashing, and the role lookup service the guard family consults.

pub mod auth;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use auth::role_lookup::RoleLookupService;
pub use auth::token_service::JwtTokenService;
pub use config::{AppConfig, ConfigLoader};
pub use logging::init_logging;
