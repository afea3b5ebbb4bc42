//! Scoped guard behavior against seeded identity data

use crate::test_utils::seeded_identity_provider;
use gavel_domain::error::Error;
use gavel_domain::roles::{ContestRole, GlobalRole};
use gavel_domain::value_objects::identity::Identity;
use gavel_infrastructure::auth::role_lookup::RoleLookupService;
use gavel_server::guards::{
    AdminGuard, AuthorizationGuard, ContestRoleGuard, GroupLeaderGuard, GroupMembershipGuard,
    ManagerGuard, RoleGuard,
};
use gavel_server::transport::http::adapt;
use gavel_server::RequestContext;

fn roles() -> RoleLookupService {
    RoleLookupService::new(seeded_identity_provider())
}

fn ctx_with(identity: Option<Identity>, query: &[(&str, &str)]) -> RequestContext {
    let mut ctx = adapt(None, query.iter().copied());
    ctx.set_identity(identity);
    ctx
}

fn alice() -> Option<Identity> {
    Some(Identity::new(1, "alice"))
}

fn assert_forbidden(result: Result<(), Error>) {
    match result {
        Err(Error::Forbidden { .. }) => {}
        other => panic!("expected Forbidden, got {other:?}"),
    }
}

#[tokio::test]
async fn test_role_guard_threshold_is_inclusive() {
    let roles = roles();
    let ctx = ctx_with(alice(), &[]);

    assert!(RoleGuard::new(GlobalRole::User).authorize(&ctx, &roles).await.is_ok());
    assert_forbidden(RoleGuard::new(GlobalRole::Admin).authorize(&ctx, &roles).await);
}

#[tokio::test]
async fn test_role_guard_denies_anonymous() {
    let roles = roles();
    let ctx = ctx_with(None, &[]);

    assert_forbidden(RoleGuard::new(GlobalRole::User).authorize(&ctx, &roles).await);
}

#[tokio::test]
async fn test_admin_guard_low_threshold_is_unconditional() {
    let roles = roles();
    // Anonymous caller, but the declared threshold is below admin so the
    // guard never engages.
    let ctx = ctx_with(None, &[]);

    assert!(AdminGuard::new(GlobalRole::User).authorize(&ctx, &roles).await.is_ok());
}

#[tokio::test]
async fn test_admin_guard_enforces_admin_threshold() {
    let roles = roles();

    let ctx = ctx_with(alice(), &[]);
    assert_forbidden(AdminGuard::new(GlobalRole::Admin).authorize(&ctx, &roles).await);

    let ctx = ctx_with(Some(Identity::new(2, "bob")), &[]);
    assert!(AdminGuard::new(GlobalRole::Admin).authorize(&ctx, &roles).await.is_ok());
}

#[tokio::test]
async fn test_group_membership_guard_without_scope_passes() {
    let roles = roles();
    let ctx = ctx_with(None, &[]);

    assert!(GroupMembershipGuard.authorize(&ctx, &roles).await.is_ok());
}

#[tokio::test]
async fn test_group_membership_guard_requires_a_row() {
    let roles = roles();

    let ctx = ctx_with(alice(), &[("groupId", "8")]);
    assert!(GroupMembershipGuard.authorize(&ctx, &roles).await.is_ok());

    let ctx = ctx_with(alice(), &[("groupId", "99")]);
    assert_forbidden(GroupMembershipGuard.authorize(&ctx, &roles).await);
}

#[tokio::test]
async fn test_group_membership_guard_admin_bypass() {
    let roles = roles();

    // Admin and super admin both pass with no membership row at all.
    for (id, name) in [(2, "bob"), (3, "carol")] {
        let ctx = ctx_with(Some(Identity::new(id, name)), &[("groupId", "99")]);
        assert!(GroupMembershipGuard.authorize(&ctx, &roles).await.is_ok());
    }
}

#[tokio::test]
async fn test_group_leader_guard_distinguishes_leadership() {
    let roles = roles();

    let ctx = ctx_with(alice(), &[("groupId", "7")]);
    assert!(GroupLeaderGuard::new().authorize(&ctx, &roles).await.is_ok());

    // Plain membership is not leadership.
    let ctx = ctx_with(alice(), &[("groupId", "8")]);
    assert_forbidden(GroupLeaderGuard::new().authorize(&ctx, &roles).await);
}

#[tokio::test]
async fn test_group_leader_guard_bypass_flag() {
    let roles = roles();
    let ctx = ctx_with(alice(), &[("groupId", "8")]);

    assert!(GroupLeaderGuard::bypassed().authorize(&ctx, &roles).await.is_ok());
}

#[tokio::test]
async fn test_contest_role_guard_threshold() {
    let roles = roles();

    // Manager and contest admin both satisfy a Manager threshold.
    for (id, name) in [(4, "dave"), (7, "grace")] {
        let ctx = ctx_with(Some(Identity::new(id, name)), &[("contestId", "3")]);
        assert!(
            ContestRoleGuard::new(ContestRole::Manager)
                .authorize(&ctx, &roles)
                .await
                .is_ok()
        );
    }

    let ctx = ctx_with(alice(), &[("contestId", "3")]);
    assert_forbidden(
        ContestRoleGuard::new(ContestRole::Manager)
            .authorize(&ctx, &roles)
            .await,
    );
    assert!(
        ContestRoleGuard::any_participant()
            .authorize(&ctx, &roles)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_contest_role_guard_super_admin_bypass() {
    let roles = roles();
    let ctx = ctx_with(Some(Identity::new(3, "carol")), &[("contestId", "3")]);

    assert!(
        ContestRoleGuard::new(ContestRole::Admin)
            .authorize(&ctx, &roles)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_contest_role_guard_without_scope_passes() {
    let roles = roles();
    let ctx = ctx_with(alice(), &[]);

    assert!(
        ContestRoleGuard::new(ContestRole::Admin)
            .authorize(&ctx, &roles)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_manager_guard_grants_each_authority_source() {
    let roles = roles();

    // Global admin, capability flag, group leadership, contest management.
    for (id, name) in [(2, "bob"), (5, "erin"), (1, "alice"), (4, "dave")] {
        let ctx = ctx_with(Some(Identity::new(id, name)), &[]);
        assert!(
            ManagerGuard.authorize(&ctx, &roles).await.is_ok(),
            "{name} should hold management authority"
        );
    }
}

#[tokio::test]
async fn test_manager_guard_denies_plain_user() {
    let roles = roles();
    let ctx = ctx_with(Some(Identity::new(6, "frank")), &[]);

    assert_forbidden(ManagerGuard.authorize(&ctx, &roles).await);
}
