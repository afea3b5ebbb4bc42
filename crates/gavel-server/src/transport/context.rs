//! The normalized request context
//!
//! What every guard sees, regardless of how the request arrived: the
//! bearer credential, the scope identifiers, and a slot for the identity
//! the gate resolves. Owned by the request and discarded with it.

use gavel_domain::value_objects::identity::Identity;
use gavel_infrastructure::constants::BEARER_PREFIX;

/// How the request physically arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Plain HTTP request
    Http,
    /// GraphQL resolver invocation riding an HTTP connection
    GraphQl,
    /// WebSocket handshake plus first inbound message
    WebSocket,
}

/// Uniform view of one inbound call
#[derive(Debug)]
pub struct RequestContext {
    transport: TransportKind,
    bearer: Option<String>,
    group_id: Option<i64>,
    contest_id: Option<i64>,
    identity: Option<Identity>,
}

impl RequestContext {
    pub(crate) fn new(
        transport: TransportKind,
        bearer: Option<String>,
        group_id: Option<i64>,
        contest_id: Option<i64>,
    ) -> Self {
        Self {
            transport,
            bearer,
            group_id,
            contest_id,
            identity: None,
        }
    }

    /// The transport this call arrived on (diagnostics only - policy code
    /// must not branch on it)
    pub fn transport(&self) -> TransportKind {
        self.transport
    }

    /// The bearer credential, already stripped of its `Bearer ` prefix
    pub fn bearer(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    /// Group scope identifier, if the caller claimed one
    pub fn group_id(&self) -> Option<i64> {
        self.group_id
    }

    /// Contest scope identifier, if the caller claimed one
    pub fn contest_id(&self) -> Option<i64> {
        self.contest_id
    }

    /// Whether any scope identifier is present
    ///
    /// Scope presence upgrades otherwise-public handlers to strict
    /// authentication.
    pub fn has_scope(&self) -> bool {
        self.group_id.is_some() || self.contest_id.is_some()
    }

    /// The identity the gate resolved, if any
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Populate (or explicitly null out) the resolved identity
    pub fn set_identity(&mut self, identity: Option<Identity>) {
        self.identity = identity;
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value
pub(crate) fn parse_bearer(header_value: &str) -> Option<String> {
    header_value
        .strip_prefix(BEARER_PREFIX)
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Parse a scope identifier value
///
/// A value that does not parse as an integer names nothing and is treated
/// as an absent scope.
pub(crate) fn parse_scope(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}
