//! Request handlers, one module per resource.

pub mod histories;
pub mod wallets;

use axum::Json;
use serde_json::{Value, json};

/// `GET /health` - liveness check, no API key required.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
