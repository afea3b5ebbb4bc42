//! Role lookup service
//!
//! Typed reads over the persistence port for the guard family. The
//! service itself caches nothing; the one memoization is the global role
//! written onto the per-request [`Identity`], bounding lookups to once
//! per request.

use gavel_domain::error::Result;
use gavel_domain::ports::role_lookup::RoleLookupProvider;
use gavel_domain::roles::{ContestRole, GlobalRole};
use gavel_domain::value_objects::identity::Identity;
use gavel_domain::value_objects::membership::{
    ContestMembership, GroupMembership, UserCapabilities,
};
use std::sync::Arc;

/// Resolves effective roles and memberships for authorization decisions
#[derive(Clone)]
pub struct RoleLookupService {
    provider: Arc<dyn RoleLookupProvider>,
}

impl RoleLookupService {
    /// Create a lookup service over the persistence collaborator
    pub fn new(provider: Arc<dyn RoleLookupProvider>) -> Self {
        Self { provider }
    }

    /// The identity's global role, memoized on the identity
    ///
    /// Fails with `NotFound` when the user row vanished between token
    /// issuance and lookup - fatal for the request.
    pub async fn global_role(&self, identity: &Identity) -> Result<GlobalRole> {
        if let Some(role) = identity.cached_role() {
            return Ok(role);
        }
        let role = self.provider.global_role(identity.id).await?;
        Ok(identity.memoize_role(role))
    }

    /// Membership row for (user, group), if any
    pub async fn group_membership(
        &self,
        user_id: i64,
        group_id: i64,
    ) -> Result<Option<GroupMembership>> {
        self.provider.group_membership(user_id, group_id).await
    }

    /// Membership row for (user, contest), if any
    pub async fn contest_membership(
        &self,
        user_id: i64,
        contest_id: i64,
    ) -> Result<Option<ContestMembership>> {
        self.provider.contest_membership(user_id, contest_id).await
    }

    /// Any group the user leads, if one exists
    pub async fn find_any_leading_group(&self, user_id: i64) -> Result<Option<GroupMembership>> {
        self.provider.find_any_leading_group(user_id).await
    }

    /// Any contest membership at or above `threshold`
    pub async fn find_any_contest_role_at_least(
        &self,
        user_id: i64,
        threshold: ContestRole,
    ) -> Result<Option<ContestMembership>> {
        self.provider
            .find_any_contest_role_at_least(user_id, threshold)
            .await
    }

    /// Management capability flags on the user's role record
    pub async fn capabilities(&self, user_id: i64) -> Result<UserCapabilities> {
        self.provider.capabilities(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gavel_domain::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts role lookups to prove the per-request memoization works
    #[derive(Default)]
    struct CountingProvider {
        role_lookups: AtomicUsize,
    }

    #[async_trait]
    impl RoleLookupProvider for CountingProvider {
        async fn global_role(&self, user_id: i64) -> Result<GlobalRole> {
            self.role_lookups.fetch_add(1, Ordering::SeqCst);
            if user_id == 404 {
                return Err(Error::not_found(format!("user {user_id}")));
            }
            Ok(GlobalRole::Admin)
        }

        async fn group_membership(
            &self,
            _user_id: i64,
            _group_id: i64,
        ) -> Result<Option<GroupMembership>> {
            Ok(None)
        }

        async fn contest_membership(
            &self,
            _user_id: i64,
            _contest_id: i64,
        ) -> Result<Option<ContestMembership>> {
            Ok(None)
        }

        async fn find_any_leading_group(&self, _user_id: i64) -> Result<Option<GroupMembership>> {
            Ok(None)
        }

        async fn find_any_contest_role_at_least(
            &self,
            _user_id: i64,
            _threshold: ContestRole,
        ) -> Result<Option<ContestMembership>> {
            Ok(None)
        }

        async fn capabilities(&self, _user_id: i64) -> Result<UserCapabilities> {
            Ok(UserCapabilities::default())
        }
    }

    #[tokio::test]
    async fn test_global_role_is_looked_up_once_per_identity() {
        let provider = Arc::new(CountingProvider::default());
        let service = RoleLookupService::new(provider.clone());
        let identity = Identity::new(1, "alice");

        assert_eq!(service.global_role(&identity).await.unwrap(), GlobalRole::Admin);
        assert_eq!(service.global_role(&identity).await.unwrap(), GlobalRole::Admin);
        assert_eq!(provider.role_lookups.load(Ordering::SeqCst), 1);
        assert_eq!(identity.cached_role(), Some(GlobalRole::Admin));
    }

    #[tokio::test]
    async fn test_missing_user_row_is_fatal() {
        let service = RoleLookupService::new(Arc::new(CountingProvider::default()));
        let identity = Identity::new(404, "ghost");

        match service.global_role(&identity).await.unwrap_err() {
            Error::NotFound { resource } => assert_eq!(resource, "user 404"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
