//! Transport context adapters
//!
//! Each transport extracts the bearer credential and scope identifiers
//! from a different place; the adapters normalize all three into one
//! [`RequestContext`] so the gate and every guard are written once,
//! against one shape. Guards must never branch on transport kind.

pub mod context;
pub mod graphql;
pub mod http;
pub mod websocket;

pub use context::{RequestContext, TransportKind};
pub use websocket::WsHandshake;
