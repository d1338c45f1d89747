//! Handlers for the `/todos` resource.
//!
//! Every handler is a thin orchestration over [`TodoRepository`]; the only
//! logic living here is input validation and the partial-update merge.
//!
//! [`TodoRepository`]: todo_db::repositories::TodoRepository

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use todo_core::todo::validate_todo_name;
use todo_db::models::todo::{CreateTodo, UpdateTodo};

use crate::error::AppResult;
use crate::extract::{JsonBody, TodoId};
use crate::response::TodoResponse;
use crate::state::AppState;

/// GET /v1/todos
pub async fn list_todos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let todos = state.repo.list_all().await?;

    let body: Vec<TodoResponse> = todos.into_iter().map(TodoResponse::from).collect();
    Ok(Json(body))
}

/// POST /v1/todos
///
/// The name must be longer than two characters. Nothing is written when
/// validation fails.
pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    validate_todo_name(&input.name)?;

    let todo = state.repo.create(&input.name).await?;

    tracing::info!(todo_id = todo.id, name = %todo.name, "Todo created");

    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

/// GET /v1/todos/{id}
pub async fn get_todo(
    TodoId(id): TodoId,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let todo = state.repo.get_by_id(id).await?;

    Ok(Json(TodoResponse::from(todo)))
}

/// PATCH /v1/todos/{id}
///
/// Reads the current row, overlays whichever fields the body supplies, and
/// writes the merged state back in full. An empty body still performs the
/// write. The name is deliberately not re-validated here.
pub async fn update_todo(
    TodoId(id): TodoId,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UpdateTodo>,
) -> AppResult<impl IntoResponse> {
    let mut todo = state.repo.get_by_id(id).await?;
    input.apply_to(&mut todo);

    let updated = state.repo.update(id, &todo.name, todo.completed).await?;

    tracing::info!(
        todo_id = updated.id,
        name = %updated.name,
        completed = ?updated.completed,
        "Todo updated",
    );

    Ok(Json(TodoResponse::from(updated)))
}

/// DELETE /v1/todos/{id}
///
/// Existence is checked before the delete; a row removed in between
/// surfaces as 404 from the delete itself.
pub async fn delete_todo(
    TodoId(id): TodoId,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    state.repo.get_by_id(id).await?;
    state.repo.delete_by_id(id).await?;

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT)
}
