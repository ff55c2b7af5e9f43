use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /
/// Liveness probe with the current server time.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "message": "Backend is running!",
        "timestamp": Utc::now().to_rfc3339()
    }))
}
