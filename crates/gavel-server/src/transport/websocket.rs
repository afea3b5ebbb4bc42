//! WebSocket transport adapter
//!
//! The handshake only establishes the connection; the credential arrives
//! in its `auth.token` field and the scope in the first inbound message
//! payload. The token is copied into a synthetic `Authorization` header
//! slot before extraction so the verification path downstream is the same
//! one HTTP uses.

use super::context::{RequestContext, TransportKind, parse_bearer};
use gavel_infrastructure::constants::{AUTHORIZATION_HEADER, BEARER_PREFIX};
use serde_json::Value;

/// The parts of a WebSocket handshake this core reads
#[derive(Debug, Default)]
pub struct WsHandshake {
    /// The handshake's `auth.token` field
    pub auth_token: Option<String>,
    /// Headers sent with the upgrade request
    pub headers: Vec<(String, String)>,
}

impl WsHandshake {
    /// A handshake carrying only an `auth.token` credential
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            auth_token: Some(token.into()),
            headers: Vec::new(),
        }
    }
}

/// Build a request context from a handshake and the first inbound message
pub fn adapt(handshake: &WsHandshake, first_message: &Value) -> RequestContext {
    // Copy auth.token into the Authorization slot, then run the shared
    // header extraction - downstream never knows this was a socket.
    let mut headers = handshake.headers.clone();
    if let Some(token) = &handshake.auth_token {
        headers.push((
            AUTHORIZATION_HEADER.to_string(),
            format!("{BEARER_PREFIX}{token}"),
        ));
    }

    let bearer = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(AUTHORIZATION_HEADER))
        .and_then(|(_, value)| parse_bearer(value));

    RequestContext::new(
        TransportKind::WebSocket,
        bearer,
        scope_field(first_message, "groupId"),
        scope_field(first_message, "contestId"),
    )
}

fn scope_field(payload: &Value, name: &str) -> Option<i64> {
    match payload.get(name)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => super::context::parse_scope(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_token_becomes_bearer() {
        let ctx = adapt(&WsHandshake::with_token("tok"), &json!({}));
        assert_eq!(ctx.bearer(), Some("tok"));
        assert_eq!(ctx.transport(), TransportKind::WebSocket);
    }

    #[test]
    fn test_scope_comes_from_first_message() {
        let ctx = adapt(
            &WsHandshake::with_token("tok"),
            &json!({ "groupId": 7, "body": "hello" }),
        );
        assert_eq!(ctx.group_id(), Some(7));
        assert_eq!(ctx.contest_id(), None);
    }

    #[test]
    fn test_handshake_without_token_is_anonymous() {
        let ctx = adapt(&WsHandshake::default(), &json!({ "contestId": 3 }));
        assert_eq!(ctx.bearer(), None);
        assert_eq!(ctx.contest_id(), Some(3));
    }

    #[test]
    fn test_explicit_authorization_header_also_works() {
        let handshake = WsHandshake {
            auth_token: None,
            headers: vec![("Authorization".to_string(), "Bearer tok".to_string())],
        };
        let ctx = adapt(&handshake, &json!({}));
        assert_eq!(ctx.bearer(), Some("tok"));
    }
}
