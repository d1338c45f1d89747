use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Mount liveness and health routes (root level, NOT under `/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
}
