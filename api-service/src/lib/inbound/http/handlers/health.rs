use axum::Json;
use chrono::Utc;
use serde_json::json;
use serde_json::Value;

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the API service",
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness endpoint for monitoring and container health checks.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
