//! GET /api/health

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe for the site frontend and deploy checks.
pub async fn health() -> Json<Value> {
    Json(json!({
        "ok": true,
        "message": "Portfolio relay is active",
    }))
}
