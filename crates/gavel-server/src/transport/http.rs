//! HTTP transport adapter
//!
//! Bearer from the `Authorization` header, scope identifiers from the
//! `groupId` / `contestId` query parameters.

use super::context::{RequestContext, TransportKind, parse_bearer, parse_scope};
use rocket::request::{FromRequest, Outcome, Request};

/// Query parameter carrying the group scope
pub const GROUP_SCOPE_PARAM: &str = "groupId";

/// Query parameter carrying the contest scope
pub const CONTEST_SCOPE_PARAM: &str = "contestId";

/// Build a request context from raw HTTP parts
pub fn adapt<'a>(
    authorization: Option<&str>,
    query: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> RequestContext {
    let bearer = authorization.and_then(parse_bearer);

    let mut group_id = None;
    let mut contest_id = None;
    for (name, value) in query {
        match name {
            GROUP_SCOPE_PARAM => group_id = group_id.or_else(|| parse_scope(value)),
            CONTEST_SCOPE_PARAM => contest_id = contest_id.or_else(|| parse_scope(value)),
            _ => {}
        }
    }

    RequestContext::new(TransportKind::Http, bearer, group_id, contest_id)
}

/// Build a request context from a Rocket request
pub fn from_rocket(request: &Request<'_>) -> RequestContext {
    let authorization = request.headers().get_one("Authorization");
    let query = request
        .uri()
        .query()
        .map(|q| q.segments().collect::<Vec<_>>())
        .unwrap_or_default();

    adapt(authorization, query)
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for RequestContext {
    type Error = std::convert::Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(from_rocket(request))
    }
}
