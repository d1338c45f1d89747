use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use todo_core::error::CoreError;
use todo_core::todo::ENTITY_NAME;
use todo_db::error::RepoError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure surfaced by a repository.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { id } => AppError::Core(CoreError::NotFound {
                entity: ENTITY_NAME,
                id,
            }),
            RepoError::Storage(err) => AppError::Database(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Log a storage failure and build a sanitized 500.
///
/// Missing rows never arrive here; repositories report them as
/// [`RepoError::NotFound`].
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
