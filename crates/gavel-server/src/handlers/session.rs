//! Session endpoints: login, reissue, logout
//!
//! The access token travels back in the `authorization` response header;
//! the refresh token lives only in an http-only cookie scoped to the
//! reissue path so scripts never see it.

use crate::builder::AppContext;
use crate::guards::policy::RoutePolicy;
use crate::response::{ApiError, TokenIssued};
use crate::transport::http;
use gavel_domain::constants::INVALID_TOKEN_MESSAGE;
use gavel_domain::error::Error;
use gavel_domain::ports::token::TokenAuthority;
use gavel_domain::value_objects::identity::Identity;
use gavel_domain::value_objects::session::TokenPair;
use gavel_infrastructure::auth::password::verify_password;
use gavel_infrastructure::constants::{REFRESH_COOKIE_NAME, REFRESH_COOKIE_PATH};
use rocket::http::{Cookie, CookieJar, SameSite, Status};
use rocket::request::{FromRequest, Outcome, Request};
use rocket::serde::json::Json;
use rocket::time::Duration;
use rocket::{State, post};
use serde::Deserialize;
use tracing::{debug, info, warn};
use validator::Validate;

/// Login request body
#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    /// Account username
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    /// Account password, verified against the stored argon2id hash
    #[validate(length(min = 1, max = 256))]
    pub password: String,
}

/// Uniform credential failure; never reveals which half was wrong
fn invalid_credentials() -> ApiError {
    ApiError::unauthorized("invalid credentials")
}

fn set_refresh_cookie(cookies: &CookieJar<'_>, token: String, ttl_secs: u64) {
    let cookie = Cookie::build((REFRESH_COOKIE_NAME, token))
        .path(REFRESH_COOKIE_PATH)
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(ttl_secs as i64));
    cookies.add(cookie);
}

fn issued_response(
    cookies: &CookieJar<'_>,
    pair: TokenPair,
    ttl_secs: u64,
    id: i64,
    username: String,
) -> TokenIssued {
    set_refresh_cookie(cookies, pair.refresh_token, ttl_secs);
    TokenIssued::new(pair.access_token, id, username)
}

/// Authenticate a user and open a fresh session
///
/// A successful login supersedes any session the user already had; the
/// previous refresh token stops rotating from this moment on.
#[post("/auth/login", data = "<body>")]
pub async fn login(
    context: &State<AppContext>,
    cookies: &CookieJar<'_>,
    body: Json<LoginRequest>,
) -> Result<TokenIssued, ApiError> {
    body.validate()
        .map_err(|err| ApiError::bad_request(err.to_string()))?;

    let user = context
        .users
        .find_by_username(&body.username)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(invalid_credentials)?;

    if !verify_password(&body.password, &user.password_hash).map_err(ApiError::from)? {
        debug!(username = %user.username, "password mismatch on login");
        return Err(invalid_credentials());
    }

    let pair = context
        .tokens
        .issue(user.id, &user.username)
        .await
        .map_err(ApiError::from)?;
    info!(user_id = user.id, "session opened");

    let ttl = context.tokens.refresh_ttl_secs();
    Ok(issued_response(cookies, pair, ttl, user.id, user.username))
}

/// Exchange the refresh cookie for a fresh token pair
///
/// Every failure collapses to the uniform 401 so callers learn nothing
/// about why the presented token stopped working.
#[post("/auth/reissue")]
pub async fn reissue(
    context: &State<AppContext>,
    cookies: &CookieJar<'_>,
) -> Result<TokenIssued, ApiError> {
    let presented = cookies
        .get(REFRESH_COOKIE_NAME)
        .ok_or_else(|| ApiError::unauthorized(INVALID_TOKEN_MESSAGE))?;

    let pair = context
        .tokens
        .rotate(presented.value())
        .await
        .map_err(ApiError::from)?;

    // The freshly issued access token is the cheapest source of the
    // claims for the response body.
    let claims = context.tokens.verify(&pair.access_token).map_err(ApiError::from)?;

    let ttl = context.tokens.refresh_ttl_secs();
    Ok(issued_response(
        cookies,
        pair,
        ttl,
        claims.user_id,
        claims.username,
    ))
}

/// A verified identity resolved by the authentication gate
///
/// Request guard for handlers that demand strict authentication outside
/// the policy-engine path.
pub struct AuthenticatedIdentity(pub Identity);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedIdentity {
    type Error = ApiError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(context) = request.rocket().state::<AppContext>() else {
            return Outcome::Error((
                Status::InternalServerError,
                ApiError::from(Error::internal("application context not managed")),
            ));
        };

        let mut ctx = http::from_rocket(request);
        match context
            .engine
            .authorize(&RoutePolicy::authenticated(), &mut ctx)
            .await
        {
            Ok(()) => match ctx.identity() {
                Some(identity) => Outcome::Success(AuthenticatedIdentity(identity.clone())),
                None => Outcome::Error((
                    Status::InternalServerError,
                    ApiError::from(Error::internal("gate passed without an identity")),
                )),
            },
            Err(err) => Outcome::Error((Status::Unauthorized, ApiError::from(err))),
        }
    }
}

/// Close the caller's session
///
/// Revoking an already-empty slot is a success; logout is idempotent.
#[post("/auth/logout")]
pub async fn logout(
    context: &State<AppContext>,
    cookies: &CookieJar<'_>,
    auth: AuthenticatedIdentity,
) -> Result<Status, ApiError> {
    match context.tokens.revoke(auth.0.id).await {
        Ok(()) => info!(user_id = auth.0.id, "session closed"),
        Err(err) if err.is_soft() => {
            warn!(user_id = auth.0.id, "logout with no active session")
        }
        Err(err) => return Err(err.into()),
    }

    cookies.remove(Cookie::build(REFRESH_COOKIE_NAME).path(REFRESH_COOKIE_PATH));
    Ok(Status::NoContent)
}
