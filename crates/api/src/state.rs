use std::sync::Arc;

use todo_db::repositories::TodoRepository;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Todo storage. Postgres in production, in-memory in tests.
    pub repo: Arc<dyn TodoRepository>,
}
