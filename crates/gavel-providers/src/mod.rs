//! Provider layer for Gavel
//!
//! Concrete implementations of the domain ports: cache backends for the
//! refresh-session store and an in-memory identity provider standing in
//! for the external persistence collaborator.

pub mod cache;
pub mod identity;

pub use cache::{MokaCacheProvider, NullCacheProvider, RedisCacheProvider, create_cache_provider};
pub use identity::MemoryIdentityProvider;
