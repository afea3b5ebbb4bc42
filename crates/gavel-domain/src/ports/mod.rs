//! Ports - contracts implemented by the infrastructure and provider layers

pub mod cache;
pub mod role_lookup;
pub mod token;
pub mod user_directory;

pub use cache::{CacheEntryConfig, CacheProvider};
pub use role_lookup::RoleLookupProvider;
pub use token::TokenAuthority;
pub use user_directory::UserDirectory;
