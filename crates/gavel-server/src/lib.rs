//! Server layer for Gavel
//!
//! Normalizes inbound calls from three transports (HTTP, GraphQL resolver
//! invocations, WebSocket handshakes) into one request context, runs the
//! authentication gate and the scoped authorization guards against it, and
//! exposes the session endpoints (login, reissue, logout) over Rocket.

pub mod builder;
pub mod guards;
pub mod handlers;
pub mod init;
pub mod response;
pub mod transport;

pub use builder::{AppContext, ServerBuilder};
pub use guards::policy::{PolicyEngine, RoutePolicy};
pub use init::build_rocket;
pub use transport::context::{RequestContext, TransportKind};
