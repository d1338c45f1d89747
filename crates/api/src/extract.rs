//! Request extractors that report rejections as [`AppError`] JSON.
//!
//! Axum's stock `Path` and `Json` rejections answer with plain text and a
//! mix of 400/415/422; every malformed input here is a 400 with the usual
//! error body.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use todo_core::types::DbId;

use crate::error::AppError;

/// Todo id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct TodoId(pub DbId);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("cannot parse id".into()))?;

        raw.parse::<DbId>()
            .map(TodoId)
            .map_err(|_| AppError::BadRequest("cannot parse id".into()))
    }
}

/// JSON request body.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Rejected request body");
                Err(AppError::BadRequest("cannot parse json".into()))
            }
        }
    }
}
