//! Health check endpoints
//!
//! Provides health check endpoints for monitoring and load balancers.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::{db, AppState};

/// Body of `GET /`
pub const LIVENESS_TEXT: &str = "VolunTrack Server running";

/// Basic health response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Plain-text liveness line served at the root path
pub async fn root() -> &'static str {
    LIVENESS_TEXT
}

/// Simple health check endpoint (for load balancers)
///
/// Returns 200 OK if the service is running.
/// Does not check the store.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness probe
///
/// Returns 200 OK if the store answers a query, 503 otherwise.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match db::check_health(&state.db).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("Readiness check failed: {:#}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
