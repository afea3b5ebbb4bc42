//! Test utilities for gavel-server
//!
//! Seeded in-memory identity data and ready-to-use application contexts
//! for guard, policy, and endpoint tests.

// Each suite uses a subset of these helpers.
#![allow(dead_code)]

use gavel_infrastructure::auth::password::hash_password;
use gavel_infrastructure::config::data::AppConfig;
use gavel_providers::identity::memory::MemoryIdentityProvider;
use gavel_server::builder::{AppContext, ServerBuilder};
use gavel_server::init::build_rocket;
use gavel_domain::roles::{ContestRole, GlobalRole};
use gavel_domain::value_objects::membership::{UserCapabilities, UserRecord};
use rocket::local::asynchronous::Client;
use std::sync::Arc;

/// Shared test password for every seeded account
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Configuration with a fixed test secret and in-memory cache
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt.secret = "test-secret-0123456789abcdef-0123456789".to_string();
    config
}

fn user(id: i64, username: &str, role: GlobalRole, capabilities: UserCapabilities) -> UserRecord {
    UserRecord {
        id,
        username: username.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing test password"),
        global_role: role,
        capabilities,
    }
}

/// Identity data every test scenario shares:
///
/// - `alice` (1): plain user, leads group 7, plain member of group 8,
///   participant in contest 3
/// - `bob` (2): global admin
/// - `carol` (3): super admin
/// - `dave` (4): plain user, manager of contest 3
/// - `erin` (5): plain user with the course-creation capability
/// - `frank` (6): plain user with nothing at all
/// - `grace` (7): plain user, contest admin of contest 3
pub fn seeded_identity_provider() -> Arc<MemoryIdentityProvider> {
    let provider = MemoryIdentityProvider::new();

    provider.insert_user(user(1, "alice", GlobalRole::User, UserCapabilities::default()));
    provider.insert_user(user(2, "bob", GlobalRole::Admin, UserCapabilities::default()));
    provider.insert_user(user(
        3,
        "carol",
        GlobalRole::SuperAdmin,
        UserCapabilities::default(),
    ));
    provider.insert_user(user(4, "dave", GlobalRole::User, UserCapabilities::default()));
    provider.insert_user(user(
        5,
        "erin",
        GlobalRole::User,
        UserCapabilities {
            can_create_course: true,
            can_create_contest: false,
        },
    ));
    provider.insert_user(user(6, "frank", GlobalRole::User, UserCapabilities::default()));
    provider.insert_user(user(7, "grace", GlobalRole::User, UserCapabilities::default()));

    provider.insert_group_membership(1, 7, true);
    provider.insert_group_membership(1, 8, false);
    provider.insert_contest_membership(1, 3, ContestRole::Participant);
    provider.insert_contest_membership(4, 3, ContestRole::Manager);
    provider.insert_contest_membership(7, 3, ContestRole::Admin);

    Arc::new(provider)
}

/// Application context over the seeded identity data
pub fn test_context() -> AppContext {
    ServerBuilder::new(test_config())
        .with_identity_provider(seeded_identity_provider())
        .build()
        .expect("building test context")
}

/// Rocket client over the seeded application
///
/// Untracked: tests pass cookies explicitly so replayed-token assertions
/// are not masked by a client-side cookie jar.
pub async fn test_client() -> Client {
    Client::untracked(build_rocket(test_context()))
        .await
        .expect("valid rocket instance")
}
