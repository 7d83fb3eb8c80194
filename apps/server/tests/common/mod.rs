#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::{rngs::OsRng, RngCore};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

use brickdesk_server::{api::app_router, build_state, config::Config};

pub const ADMIN_EMAIL: &str = "admin@brickdesk.io";
pub const ADMIN_PASSWORD: &str = "admin-password";

/// Builds a router against a throwaway database seeded with one admin.
/// The `TempDir` guard must stay alive for as long as the router is used.
pub async fn test_router() -> (axum::Router, TempDir) {
    let tmp = tempdir().unwrap();

    let mut secret_bytes = [0u8; 32];
    OsRng.fill_bytes(&mut secret_bytes);

    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().join("test.db").to_string_lossy().into_owned(),
        auth_secret: BASE64.encode(secret_bytes),
        bootstrap_admin_email: Some(ADMIN_EMAIL.to_string()),
        bootstrap_admin_password: Some(ADMIN_PASSWORD.to_string()),
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state), tmp)
}

/// Logs in and returns a bearer token.
pub async fn login(app: &axum::Router, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    json["accessToken"].as_str().unwrap().to_string()
}

/// POSTs a JSON body with a bearer token and returns the response.
pub async fn post_json(
    app: &axum::Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
