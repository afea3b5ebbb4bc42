//! Domain value objects

pub mod identity;
pub mod membership;
pub mod session;

pub use identity::Identity;
pub use membership::{ContestMembership, GroupMembership, UserCapabilities, UserRecord};
pub use session::{RefreshSession, TokenClaims, TokenPair};
