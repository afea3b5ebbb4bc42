//! Identity providers
//!
//! The user, group-membership, and contest-membership tables are owned by
//! the platform's database; this module holds the in-memory stand-in used
//! for development and tests.

pub mod memory;

pub use memory::MemoryIdentityProvider;
