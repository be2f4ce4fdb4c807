//! Liveness endpoint

use axum::Json;
use serde::Serialize;

/// Status response body
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Always `ok` while the process answers
    pub status: &'static str,
    /// Human-readable liveness message
    pub message: &'static str,
    /// Server version
    pub version: &'static str,
}

/// Report that the backend is up
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        message: "Backend is live",
        version: env!("CARGO_PKG_VERSION"),
    })
}
