//! Shared helpers for HTTP-level integration tests.
//!
//! Requests go straight into the router through `tower::ServiceExt`; no TCP
//! listener is involved.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use todo_api::config::{LogFormat, ServerConfig, StorageBackend};
use todo_api::router::build_app_router;
use todo_api::state::AppState;
use todo_core::types::DbId;
use todo_db::error::{RepoError, RepoResult};
use todo_db::models::todo::Todo;
use todo_db::repositories::{InMemoryTodoRepo, TodoRepository};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
        storage: StorageBackend::Memory,
        log_format: LogFormat::Pretty,
    }
}

/// Full application router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(InMemoryTodoRepo::new()))
}

/// Full application router over the given repository.
pub fn build_test_app_with(repo: Arc<dyn TodoRepository>) -> Router {
    build_app_router(AppState { repo }, &test_config())
}

/// Repository whose every call fails as if the database were unreachable.
pub struct UnavailableRepo;

#[async_trait]
impl TodoRepository for UnavailableRepo {
    async fn list_all(&self) -> RepoResult<Vec<Todo>> {
        Err(RepoError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn create(&self, _name: &str) -> RepoResult<Todo> {
        Err(RepoError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_id(&self, _id: DbId) -> RepoResult<Todo> {
        Err(RepoError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _id: DbId, _name: &str, _completed: Option<bool>) -> RepoResult<Todo> {
        Err(RepoError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn delete_by_id(&self, _id: DbId) -> RepoResult<()> {
        Err(RepoError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> RepoResult<()> {
        Err(RepoError::Storage(sqlx::Error::PoolTimedOut))
    }
}

/// Repository where every todo exists when read but is gone by the time it
/// is written, as if a concurrent request deleted it in between.
pub struct VanishingRepo;

#[async_trait]
impl TodoRepository for VanishingRepo {
    async fn list_all(&self) -> RepoResult<Vec<Todo>> {
        Ok(Vec::new())
    }

    async fn create(&self, _name: &str) -> RepoResult<Todo> {
        Err(RepoError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_id(&self, id: DbId) -> RepoResult<Todo> {
        let now = chrono::Utc::now();
        Ok(Todo {
            id,
            name: "about to vanish".to_string(),
            completed: None,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update(&self, id: DbId, _name: &str, _completed: Option<bool>) -> RepoResult<Todo> {
        Err(RepoError::NotFound { id })
    }

    async fn delete_by_id(&self, id: DbId) -> RepoResult<()> {
        Err(RepoError::NotFound { id })
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body.to_string()).await
}

/// Send a raw string body labelled as JSON.
pub async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Create a todo and return its id.
pub async fn create_todo(app: &Router, name: &str) -> i64 {
    let response = post_json(app.clone(), "/v1/todos", serde_json::json!({ "name": name })).await;
    body_json(response).await["id"].as_i64().unwrap()
}
