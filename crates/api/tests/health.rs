//! Integration tests for the liveness routes and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, body_text, build_test_app, build_test_app_with, get, UnavailableRepo};

#[tokio::test]
async fn root_returns_plain_text_liveness() {
    let app = build_test_app();
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Hello, World!");
}

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = build_test_app();
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_degraded_storage() {
    let app = build_test_app_with(Arc::new(UnavailableRepo));
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app();
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app();
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}
