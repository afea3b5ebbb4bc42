//! Gate-then-guards evaluation through the policy engine

use crate::test_utils::test_context;
use gavel_domain::constants::INVALID_TOKEN_MESSAGE;
use gavel_domain::error::Error;
use gavel_domain::ports::token::TokenAuthority;
use gavel_server::guards::{GroupLeaderGuard, RoleGuard};
use gavel_server::transport::http::adapt;
use gavel_server::RoutePolicy;
use gavel_domain::roles::GlobalRole;
use std::sync::Arc;

fn assert_unauthorized(result: Result<(), Error>) {
    match result {
        Err(Error::Unauthorized { message }) => assert_eq!(message, INVALID_TOKEN_MESSAGE),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn test_identical_decision_across_transport_shapes() {
    let context = test_context();
    let pair = context.tokens.issue(1, "alice").await.unwrap();
    let header = format!("Bearer {}", pair.access_token);
    let policy = RoutePolicy::authenticated().with_guard(Arc::new(GroupLeaderGuard::new()));

    let mut http_ctx = adapt(Some(&header), [("groupId", "7")]);
    let mut graphql_ctx = gavel_server::transport::graphql::adapt(
        Some(&header),
        &serde_json::json!({ "groupId": 7 }),
    );

    assert!(context.engine.authorize(&policy, &mut http_ctx).await.is_ok());
    assert!(context.engine.authorize(&policy, &mut graphql_ctx).await.is_ok());
}

#[tokio::test]
async fn test_led_group_passes_and_plain_membership_fails() {
    let context = test_context();
    let pair = context.tokens.issue(1, "alice").await.unwrap();
    let header = format!("Bearer {}", pair.access_token);
    let policy = RoutePolicy::authenticated().with_guard(Arc::new(GroupLeaderGuard::new()));

    let mut ctx = adapt(Some(&header), [("groupId", "7")]);
    assert!(context.engine.authorize(&policy, &mut ctx).await.is_ok());

    let mut ctx = adapt(Some(&header), [("groupId", "8")]);
    match context.engine.authorize(&policy, &mut ctx).await {
        Err(Error::Forbidden { .. }) => {}
        other => panic!("expected Forbidden, got {other:?}"),
    }
}

#[tokio::test]
async fn test_required_policy_rejects_missing_and_garbage_tokens() {
    let context = test_context();
    let policy = RoutePolicy::authenticated();

    let mut ctx = adapt(None, []);
    assert_unauthorized(context.engine.authorize(&policy, &mut ctx).await);

    let mut ctx = adapt(Some("Bearer not.a.jwt"), []);
    assert_unauthorized(context.engine.authorize(&policy, &mut ctx).await);
}

#[tokio::test]
async fn test_public_policy_is_anonymous_until_scoped() {
    let context = test_context();
    let policy = RoutePolicy::public();

    let mut ctx = adapt(None, []);
    assert!(context.engine.authorize(&policy, &mut ctx).await.is_ok());
    assert!(ctx.identity().is_none());

    // Scope presence revokes the public bypass.
    let mut ctx = adapt(None, [("contestId", "3")]);
    assert_unauthorized(context.engine.authorize(&policy, &mut ctx).await);
}

#[tokio::test]
async fn test_soft_policy_downgrades_bad_credentials() {
    let context = test_context();
    let policy = RoutePolicy::soft();

    let mut ctx = adapt(Some("Bearer expired-or-garbage"), []);
    assert!(context.engine.authorize(&policy, &mut ctx).await.is_ok());
    assert!(ctx.identity().is_none());

    let mut ctx = adapt(Some("Bearer expired-or-garbage"), [("groupId", "7")]);
    assert_unauthorized(context.engine.authorize(&policy, &mut ctx).await);
}

#[tokio::test]
async fn test_global_role_threshold_over_issued_tokens() {
    let context = test_context();
    let pair = context.tokens.issue(1, "alice").await.unwrap();
    let header = format!("Bearer {}", pair.access_token);

    let admin_only = RoutePolicy::authenticated()
        .with_guard(Arc::new(RoleGuard::new(GlobalRole::Admin)));
    let mut ctx = adapt(Some(&header), []);
    match context.engine.authorize(&admin_only, &mut ctx).await {
        Err(Error::Forbidden { .. }) => {}
        other => panic!("expected Forbidden, got {other:?}"),
    }

    let user_level = RoutePolicy::authenticated()
        .with_guard(Arc::new(RoleGuard::new(GlobalRole::User)));
    let mut ctx = adapt(Some(&header), []);
    assert!(context.engine.authorize(&user_level, &mut ctx).await.is_ok());
}

#[tokio::test]
async fn test_guards_run_in_declared_order() {
    let context = test_context();
    let pair = context.tokens.issue(1, "alice").await.unwrap();
    let header = format!("Bearer {}", pair.access_token);

    // The first denial wins: the admin role guard fails before the group
    // guard would have passed.
    let policy = RoutePolicy::authenticated()
        .with_guard(Arc::new(RoleGuard::new(GlobalRole::Admin)))
        .with_guard(Arc::new(GroupLeaderGuard::new()));

    let mut ctx = adapt(Some(&header), [("groupId", "7")]);
    match context.engine.authorize(&policy, &mut ctx).await {
        Err(Error::Forbidden { .. }) => {}
        other => panic!("expected Forbidden, got {other:?}"),
    }
}
