//! GraphQL transport adapter
//!
//! Resolver invocations ride one physical HTTP connection, so the bearer
//! comes from the underlying request's `Authorization` header. Scope
//! identifiers come from the resolver's argument bag by name - GraphQL
//! requests carry no query-string scoping.

use super::context::{RequestContext, TransportKind, parse_bearer};
use serde_json::Value;

/// Argument carrying the group scope
pub const GROUP_SCOPE_ARG: &str = "groupId";

/// Argument carrying the contest scope
pub const CONTEST_SCOPE_ARG: &str = "contestId";

/// Build a request context from the underlying HTTP request and the
/// resolver's argument bag
pub fn adapt(authorization: Option<&str>, arguments: &Value) -> RequestContext {
    let bearer = authorization.and_then(parse_bearer);

    RequestContext::new(
        TransportKind::GraphQl,
        bearer,
        scope_argument(arguments, GROUP_SCOPE_ARG),
        scope_argument(arguments, CONTEST_SCOPE_ARG),
    )
}

/// Read a scope id from the argument bag
///
/// Accepts both native numbers and numeric strings; anything else names
/// nothing and is treated as absent.
fn scope_argument(arguments: &Value, name: &str) -> Option<i64> {
    match arguments.get(name)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => super::context::parse_scope(s),
        _ => None,
    }
}
