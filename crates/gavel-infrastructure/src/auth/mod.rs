//! Authentication infrastructure
//!
//! JWT claims and signing, the refresh-session lifecycle, password
//! hashing, and the role lookup service.

pub mod claims;
pub mod password;
pub mod role_lookup;
pub mod token_service;

pub use claims::Claims;
pub use role_lookup::RoleLookupService;
pub use token_service::JwtTokenService;
