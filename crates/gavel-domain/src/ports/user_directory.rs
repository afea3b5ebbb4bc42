//! User Directory Port
//!
//! Credential lookups for the login endpoint. The user table is owned by
//! the persistence collaborator; this core only reads it.

use crate::error::Result;
use crate::value_objects::membership::UserRecord;
use async_trait::async_trait;

/// Read access to the user table
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a user by unique username
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>>;

    /// Find a user by id
    async fn find_by_id(&self, user_id: i64) -> Result<Option<UserRecord>>;
}
