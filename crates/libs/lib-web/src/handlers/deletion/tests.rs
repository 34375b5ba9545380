//! # Deletion Handler Tests
//!
//! Drives the full router (middleware, API routes and page fallback) with
//! `oneshot` requests against an in-memory database.

use super::*;
use crate::middleware::mw_req_stamp::REQUEST_ID_HEADER;
use crate::server::{create_router, AppState, ServerConfig};
use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use chrono::Duration;
use lib_core::dto::{DeletionStatus, ErrorResponse};
use lib_core::run_migrations;
use sqlx::sqlite::SqlitePoolOptions;
use std::path::PathBuf;
use tower::ServiceExt;

/// Setup test database with schema
async fn setup_test_db() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    run_migrations(&pool).await.expect("Failed to run migrations");
    pool
}

/// Create test app with the production router
async fn test_app(dist_dir: PathBuf) -> Router {
    let state = AppState {
        db: setup_test_db().await,
        config: Config::default(),
        issuer: ReferenceIssuer::default(),
    };
    let config = ServerConfig {
        dist_dir,
        ..Default::default()
    };
    create_router(state, &config)
}

/// Dist directory with a minimal built site
fn temp_dist() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("site-dist-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html><body>expenzez</body></html>").unwrap();
    std::fs::write(dir.join("app.js"), "console.log('app');").unwrap();
    dir
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn test_request_deletion_accepted() {
    let app = test_app(temp_dist()).await;

    let response = app
        .oneshot(post_json(
            "/api/account-deletion",
            r#"{"email":"  alice@example.com ","reason":"Switching apps"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));

    let receipt: AccountDeletionReceipt = body_json(response).await;
    assert!(receipt.reference_id.starts_with("DDR-"));
    assert!(parse_reference_id(&receipt.reference_id).is_some());
    assert_eq!(receipt.status, DeletionStatus::Pending);
    assert_eq!(receipt.purge_by, receipt.requested_at + Duration::days(30));
}

#[tokio::test]
async fn test_consecutive_requests_get_distinct_references() {
    let app = test_app(temp_dist()).await;

    let first = app
        .clone()
        .oneshot(post_json("/api/account-deletion", r#"{"email":"a@example.com"}"#))
        .await
        .unwrap();
    let second = app
        .oneshot(post_json("/api/account-deletion", r#"{"email":"b@example.com"}"#))
        .await
        .unwrap();

    let first: AccountDeletionReceipt = body_json(first).await;
    let second: AccountDeletionReceipt = body_json(second).await;
    assert_ne!(first.reference_id, second.reference_id);
    assert!(
        parse_reference_id(&second.reference_id).unwrap()
            > parse_reference_id(&first.reference_id).unwrap()
    );
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let app = test_app(temp_dist()).await;

    for email in ["", "   ", "not-an-email", "a@", "@example.com"] {
        let body = serde_json::json!({ "email": email }).to_string();
        let response = app
            .clone()
            .oneshot(post_json("/api/account-deletion", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "email {:?}", email);
        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.code, "InvalidInput");
        assert_eq!(error.error, "Invalid email format");
    }
}

#[tokio::test]
async fn test_overlong_reason_rejected() {
    let app = test_app(temp_dist()).await;

    let body = serde_json::json!({
        "email": "alice@example.com",
        "reason": "x".repeat(MAX_REASON_CHARS + 1),
    })
    .to_string();
    let response = app
        .clone()
        .oneshot(post_json("/api/account-deletion", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Surrounding whitespace does not count towards the limit.
    let body = serde_json::json!({
        "email": "alice@example.com",
        "reason": format!("  {}  ", "x".repeat(MAX_REASON_CHARS)),
    })
    .to_string();
    let response = app
        .oneshot(post_json("/api/account-deletion", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let app = test_app(temp_dist()).await;

    let response = app
        .clone()
        .oneshot(post_json("/api/account-deletion", "{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.code, "InvalidInput");

    let response = app
        .oneshot(post_json("/api/account-deletion", r#"{"reason":"no email"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_lookup() {
    let app = test_app(temp_dist()).await;

    let response = app
        .clone()
        .oneshot(post_json("/api/account-deletion", r#"{"email":"alice@example.com"}"#))
        .await
        .unwrap();
    let accepted: AccountDeletionReceipt = body_json(response).await;

    let response = app
        .oneshot(get(&format!("/api/account-deletion/{}", accepted.reference_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let found: AccountDeletionReceipt = body_json(response).await;
    assert_eq!(found, accepted);
}

#[tokio::test]
async fn test_status_lookup_unknown_reference() {
    let app = test_app(temp_dist()).await;

    for reference_id in ["DDR-1", "DDR-abc", "1760745600000", "nothing"] {
        let response = app
            .clone()
            .oneshot(get(&format!("/api/account-deletion/{}", reference_id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "id {}", reference_id);

        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.code, "NotFound");
    }
}

#[tokio::test]
async fn test_status_lookup_rejects_zero_padded_reference() {
    let app = test_app(temp_dist()).await;

    let response = app
        .clone()
        .oneshot(post_json("/api/account-deletion", r#"{"email":"alice@example.com"}"#))
        .await
        .unwrap();
    let accepted: AccountDeletionReceipt = body_json(response).await;
    let padded = accepted.reference_id.replacen("DDR-", "DDR-0", 1);

    let response = app
        .oneshot(get(&format!("/api/account-deletion/{}", padded)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_on_api_route_is_json_405() {
    let app = test_app(temp_dist()).await;

    let wrong_methods = [
        get("/api/account-deletion"),
        post_json("/api/account-deletion/DDR-1", "{}"),
        Request::builder()
            .method("DELETE")
            .uri("/api/account-deletion/DDR-1")
            .body(Body::empty())
            .unwrap(),
    ];
    for request in wrong_methods {
        let target = format!("{} {}", request.method(), request.uri());
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", target);

        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.code, "MethodNotAllowed", "{}", target);
        assert!(!error.error.is_empty());
    }
}

#[tokio::test]
async fn test_unknown_api_path_is_json_404() {
    let app = test_app(temp_dist()).await;

    let response = app.oneshot(get("/api/does-not-exist")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.code, "NotFound");
}

#[tokio::test]
async fn test_health() {
    let app = test_app(temp_dist()).await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"OK");
}

#[tokio::test]
async fn test_pages_fall_back_to_index() {
    let dist = temp_dist();
    let app = test_app(dist.clone()).await;

    for path in ["/", "/support", "/account-deletion", "/no-such-page"] {
        let response = app.clone().oneshot(get(path)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "path {}", path);
        assert_eq!(
            body_bytes(response).await,
            b"<html><body>expenzez</body></html>",
            "path {}",
            path
        );
    }

    let response = app.oneshot(get("/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"console.log('app');");

    std::fs::remove_dir_all(dist).unwrap();
}
