mod common;

use axum::{
    body::Body,
    http::{header, Method, Request},
};
use tower::ServiceExt;

use common::{body_json, test_router};

#[tokio::test]
async fn preflight_is_answered_with_open_cors() {
    let (app, _guard) = test_router().await;

    for path in ["/api/estimate", "/api/tasacion-webhook", "/api/admin-users"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri(path)
                    .header(header::ORIGIN, "https://dashboard.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200, "preflight failed for {path}");
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*"),
            "missing CORS header for {path}"
        );
    }
}

#[tokio::test]
async fn tasacion_webhook_always_returns_200_when_unconfigured() {
    // The webhook relay must never block its caller, even with no upstream
    // configured at all.
    std::env::remove_var("AUTOMATION_WEBHOOK_URL");
    std::env::remove_var("AUTOMATION_WEBHOOK_KEY");

    let (app, _guard) = test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/tasacion-webhook")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({ "direccion": "Av. Santa Fe 1234" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body = body_json(response).await;
    assert_eq!(body["queued"], false);
    assert_eq!(body["reason"], "not configured");
}

#[tokio::test]
async fn estimate_without_configuration_is_a_500() {
    std::env::remove_var("ESTIMATE_URL");

    let (app, _guard) = test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/estimate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("not configured"));
}
