//! In-memory identity provider
//!
//! Implements both the role lookup and user directory ports over
//! concurrent maps. Stands in for the external persistence collaborator
//! in development and tests; seeding happens through the builder-style
//! `insert_*` methods.

use async_trait::async_trait;
use dashmap::DashMap;
use gavel_domain::error::{Error, Result};
use gavel_domain::ports::role_lookup::RoleLookupProvider;
use gavel_domain::ports::user_directory::UserDirectory;
use gavel_domain::roles::{ContestRole, GlobalRole};
use gavel_domain::value_objects::membership::{
    ContestMembership, GroupMembership, UserCapabilities, UserRecord,
};

/// In-memory users and memberships
#[derive(Debug, Default)]
pub struct MemoryIdentityProvider {
    users: DashMap<i64, UserRecord>,
    group_memberships: DashMap<(i64, i64), GroupMembership>,
    contest_memberships: DashMap<(i64, i64), ContestMembership>,
}

impl MemoryIdentityProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user row
    pub fn insert_user(&self, user: UserRecord) {
        self.users.insert(user.id, user);
    }

    /// Insert or replace a (user, group) membership row
    pub fn insert_group_membership(&self, user_id: i64, group_id: i64, is_group_leader: bool) {
        self.group_memberships.insert(
            (user_id, group_id),
            GroupMembership {
                user_id,
                group_id,
                is_group_leader,
            },
        );
    }

    /// Insert or replace a (user, contest) membership row
    pub fn insert_contest_membership(&self, user_id: i64, contest_id: i64, role: ContestRole) {
        self.contest_memberships.insert(
            (user_id, contest_id),
            ContestMembership {
                user_id,
                contest_id,
                role,
            },
        );
    }
}

#[async_trait]
impl RoleLookupProvider for MemoryIdentityProvider {
    async fn global_role(&self, user_id: i64) -> Result<GlobalRole> {
        self.users
            .get(&user_id)
            .map(|user| user.global_role)
            .ok_or_else(|| Error::not_found(format!("user {user_id}")))
    }

    async fn group_membership(
        &self,
        user_id: i64,
        group_id: i64,
    ) -> Result<Option<GroupMembership>> {
        Ok(self
            .group_memberships
            .get(&(user_id, group_id))
            .map(|row| row.clone()))
    }

    async fn contest_membership(
        &self,
        user_id: i64,
        contest_id: i64,
    ) -> Result<Option<ContestMembership>> {
        Ok(self
            .contest_memberships
            .get(&(user_id, contest_id))
            .map(|row| row.clone()))
    }

    async fn find_any_leading_group(&self, user_id: i64) -> Result<Option<GroupMembership>> {
        Ok(self
            .group_memberships
            .iter()
            .find(|row| row.user_id == user_id && row.is_group_leader)
            .map(|row| row.clone()))
    }

    async fn find_any_contest_role_at_least(
        &self,
        user_id: i64,
        threshold: ContestRole,
    ) -> Result<Option<ContestMembership>> {
        Ok(self
            .contest_memberships
            .iter()
            .find(|row| row.user_id == user_id && row.role.satisfies(threshold))
            .map(|row| row.clone()))
    }

    async fn capabilities(&self, user_id: i64) -> Result<UserCapabilities> {
        self.users
            .get(&user_id)
            .map(|user| user.capabilities)
            .ok_or_else(|| Error::not_found(format!("user {user_id}")))
    }
}

#[async_trait]
impl UserDirectory for MemoryIdentityProvider {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        Ok(self
            .users
            .iter()
            .find(|user| user.username == username)
            .map(|user| user.clone()))
    }

    async fn find_by_id(&self, user_id: i64) -> Result<Option<UserRecord>> {
        Ok(self.users.get(&user_id).map(|user| user.clone()))
    }
}
