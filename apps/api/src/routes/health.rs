use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

/// GET /health
/// Returns a status object with the current UTC timestamp.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }))
}

/// GET /api/
pub async fn api_info_handler() -> Json<Value> {
    Json(json!({
        "message": "Enhanced Business SEO Dashboard API"
    }))
}
