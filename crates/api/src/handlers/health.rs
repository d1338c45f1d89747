use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the storage backend is reachable.
    pub db_healthy: bool,
}

/// GET / -- plain-text liveness.
pub async fn root() -> &'static str {
    "Hello, World!"
}

/// GET /health -- returns service and storage health.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match state.repo.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Storage health check failed");
            false
        }
    };

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}
