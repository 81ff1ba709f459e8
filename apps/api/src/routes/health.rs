use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Liveness only; does not touch the upstream model.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "Content Trend Analyzer"
    }))
}
