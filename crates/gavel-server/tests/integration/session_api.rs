//! Session endpoint flows over a live Rocket instance

use crate::test_utils::{TEST_PASSWORD, test_client};
use gavel_infrastructure::constants::REFRESH_COOKIE_NAME;
use rocket::http::{ContentType, Cookie, Header, Status};
use rocket::local::asynchronous::{Client, LocalResponse};

async fn login<'a>(client: &'a Client, username: &str, password: &str) -> LocalResponse<'a> {
    client
        .post("/auth/login")
        .header(ContentType::JSON)
        .body(format!(
            r#"{{"username":"{username}","password":"{password}"}}"#
        ))
        .dispatch()
        .await
}

#[rocket::async_test]
async fn test_login_returns_header_token_and_refresh_cookie() {
    let client = test_client().await;
    let response = login(&client, "alice", TEST_PASSWORD).await;

    assert_eq!(response.status(), Status::Ok);
    let access = response
        .headers()
        .get_one("authorization")
        .expect("access token header");
    assert!(!access.is_empty());

    let cookie = response
        .cookies()
        .get(REFRESH_COOKIE_NAME)
        .expect("refresh cookie");
    assert!(!cookie.value().is_empty());

    let body: serde_json::Value =
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(body["username"], "alice");
}

#[rocket::async_test]
async fn test_login_failures_are_uniform() {
    let client = test_client().await;

    let wrong_password = login(&client, "alice", "not the password").await;
    assert_eq!(wrong_password.status(), Status::Unauthorized);
    let first = wrong_password.into_string().await.unwrap();

    let unknown_user = login(&client, "nobody", TEST_PASSWORD).await;
    assert_eq!(unknown_user.status(), Status::Unauthorized);
    let second = unknown_user.into_string().await.unwrap();

    // Same body either way; no account enumeration.
    assert_eq!(first, second);
}

#[rocket::async_test]
async fn test_reissue_without_cookie_is_invalid_token() {
    let client = test_client().await;
    let response = client.post("/auth/reissue").dispatch().await;

    assert_eq!(response.status(), Status::Unauthorized);
    assert!(response.cookies().get(REFRESH_COOKIE_NAME).is_none());

    let body: serde_json::Value =
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert_eq!(body["message"], "Invalid Token");
}

#[rocket::async_test]
async fn test_reissue_rotates_the_session() {
    let client = test_client().await;
    let refresh = login(&client, "alice", TEST_PASSWORD)
        .await
        .cookies()
        .get(REFRESH_COOKIE_NAME)
        .expect("refresh cookie")
        .value()
        .to_string();

    let reissue = |token: String| async {
        client
            .post("/auth/reissue")
            .cookie(Cookie::new(REFRESH_COOKIE_NAME, token))
            .dispatch()
            .await
    };

    let first = reissue(refresh.clone()).await;
    assert_eq!(first.status(), Status::Ok);
    let rotated = first
        .cookies()
        .get(REFRESH_COOKIE_NAME)
        .expect("rotated refresh cookie")
        .value()
        .to_string();
    assert_ne!(rotated, refresh);

    // The superseded token no longer rotates; the rotated one does. The
    // failure body carries the uniform message, same as the absent-cookie
    // case.
    let replayed = reissue(refresh).await;
    assert_eq!(replayed.status(), Status::Unauthorized);
    let body: serde_json::Value =
        serde_json::from_str(&replayed.into_string().await.unwrap()).unwrap();
    assert_eq!(body["message"], "Invalid Token");

    let current = reissue(rotated).await;
    assert_eq!(current.status(), Status::Ok);
}

#[rocket::async_test]
async fn test_logout_revokes_the_refresh_session() {
    let client = test_client().await;
    let response = login(&client, "alice", TEST_PASSWORD).await;
    let access = response
        .headers()
        .get_one("authorization")
        .expect("access token header")
        .to_string();
    let refresh = response
        .cookies()
        .get(REFRESH_COOKIE_NAME)
        .expect("refresh cookie")
        .value()
        .to_string();

    let logout = client
        .post("/auth/logout")
        .header(Header::new("Authorization", format!("Bearer {access}")))
        .dispatch()
        .await;
    assert_eq!(logout.status(), Status::NoContent);

    let replay = client
        .post("/auth/reissue")
        .cookie(Cookie::new(REFRESH_COOKIE_NAME, refresh))
        .dispatch()
        .await;
    assert_eq!(replay.status(), Status::Unauthorized);
    let body: serde_json::Value =
        serde_json::from_str(&replay.into_string().await.unwrap()).unwrap();
    assert_eq!(body["message"], "Invalid Token");
}

#[rocket::async_test]
async fn test_logout_requires_authentication() {
    let client = test_client().await;

    let anonymous = client.post("/auth/logout").dispatch().await;
    assert_eq!(anonymous.status(), Status::Unauthorized);

    // Idempotent: a second logout with a still-valid access token is a
    // success even though the session slot is already empty.
    let response = login(&client, "bob", TEST_PASSWORD).await;
    let access = response
        .headers()
        .get_one("authorization")
        .expect("access token header")
        .to_string();
    let auth = Header::new("Authorization", format!("Bearer {access}"));

    let first = client.post("/auth/logout").header(auth.clone()).dispatch().await;
    assert_eq!(first.status(), Status::NoContent);
    let second = client.post("/auth/logout").header(auth).dispatch().await;
    assert_eq!(second.status(), Status::NoContent);
}

#[rocket::async_test]
async fn test_health_probes_are_open() {
    let client = test_client().await;

    let live = client.get("/live").dispatch().await;
    assert_eq!(live.status(), Status::Ok);

    let ready = client.get("/ready").dispatch().await;
    assert_eq!(ready.status(), Status::Ok);
}
