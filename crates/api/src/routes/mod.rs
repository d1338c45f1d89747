pub mod health;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// ```text
/// /todos          list, create
/// /todos/{id}     get, update (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/todos", todo::router())
}
