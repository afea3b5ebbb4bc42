//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `gavel_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "gavel.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "gavel";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "GAVEL";

/// Environment variable holding the shared JWT signing secret
///
/// Takes precedence over `auth.jwt.secret` from any other source. Both
/// token kinds share this one secret; only their expirations differ.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// Access token lifetime in seconds (30 minutes)
pub const ACCESS_TOKEN_EXPIRATION_SECS: u64 = 1800;

/// Refresh token lifetime in seconds (24 hours)
pub const REFRESH_TOKEN_EXPIRATION_SECS: u64 = 86400;

/// Minimum accepted JWT secret length
pub const JWT_SECRET_MIN_LENGTH: usize = 32;

/// Default token issuer
pub const DEFAULT_TOKEN_ISSUER: &str = "gavel";

/// Authorization header name
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Bearer token prefix
pub const BEARER_PREFIX: &str = "Bearer ";

/// Name of the HTTP-only refresh token cookie
pub const REFRESH_COOKIE_NAME: &str = "refresh_token";

/// Path the refresh cookie is scoped to
pub const REFRESH_COOKIE_PATH: &str = "/auth/reissue";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default cache TTL in seconds (1 hour)
pub const CACHE_DEFAULT_TTL_SECS: u64 = 3600;

/// Default in-memory cache capacity (entries)
pub const CACHE_DEFAULT_MAX_ENTRIES: u64 = 100_000;

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default server bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 4000;
