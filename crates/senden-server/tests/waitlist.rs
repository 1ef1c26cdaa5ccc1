//! Endpoint contract tests for the validation and routing paths.
//!
//! The happy path needs live Google credentials and is exercised manually;
//! everything below stays on the client-error side of the handler.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
    let app = senden_server::router();
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/waitlist")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn rejects_malformed_email() {
    let (status, body) = post_json(r#"{"name":"Ann","email":"bad"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email address");
}

#[tokio::test]
async fn rejects_missing_name() {
    let (status, body) = post_json(r#"{"email":"ann@x.com"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name is required");
}

#[tokio::test]
async fn rejects_blank_name() {
    let (status, body) = post_json(r#"{"name":"   ","email":"ann@x.com"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name is required");
}

#[tokio::test]
async fn rejects_missing_email() {
    let (status, body) = post_json(r#"{"name":"Ann"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email is required");
}

#[tokio::test]
async fn rejects_non_post_methods() {
    let app = senden_server::router();
    let resp = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/waitlist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "Method not allowed");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = senden_server::router();
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/other")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
