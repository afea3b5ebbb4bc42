//! Liveness and readiness endpoints
//!
//! Unauthenticated by design; orchestrators probe these before any
//! credentials exist.

use rocket::get;
use rocket::serde::json::{Json, Value, json};

/// Liveness probe
#[get("/live")]
pub fn live() -> Json<Value> {
    Json(json!({ "alive": true }))
}

/// Readiness probe
#[get("/ready")]
pub fn ready() -> Json<Value> {
    Json(json!({ "ready": true }))
}
