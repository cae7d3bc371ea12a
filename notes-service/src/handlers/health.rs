use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Does not touch the provider.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "notes-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
