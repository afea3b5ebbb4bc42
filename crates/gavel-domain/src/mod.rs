//! Domain layer for Gavel - the authorization core of an online judge
//!
//! Pure types and contracts: role hierarchies, per-request identities,
//! membership facts, the error taxonomy, and the ports the infrastructure
//! and provider layers implement. No I/O happens in this crate.

pub mod constants;
pub mod error;
pub mod ports;
pub mod roles;
pub mod value_objects;

pub use error::{Error, Result};
pub use roles::{ContestRole, GlobalRole, RoleHierarchy};
pub use value_objects::identity::Identity;
pub use value_objects::membership::{ContestMembership, GroupMembership, UserCapabilities};
pub use value_objects::session::{TokenClaims, TokenPair};
