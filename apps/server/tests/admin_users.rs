mod common;

use axum::{
    body::Body,
    http::{header, Method, Request},
};
use tower::ServiceExt;

use common::{body_json, login, post_json, test_router, ADMIN_EMAIL, ADMIN_PASSWORD};

#[tokio::test]
async fn admin_users_requires_bearer_token() {
    let (app, _guard) = test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/admin-users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn admin_users_rejects_garbage_token() {
    let (app, _guard) = test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/admin-users")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn non_admin_is_forbidden_and_admin_creates_users() {
    let (app, _guard) = test_router().await;
    let admin_token = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    // Admin invites an agent.
    let response = post_json(
        &app,
        "/api/admin-users",
        &admin_token,
        serde_json::json!({
            "email": "marta@brickdesk.io",
            "password": "marta-password",
            "fullName": "Marta Lopez",
            "role": "agent"
        }),
    )
    .await;
    assert_eq!(response.status(), 200);
    let created = body_json(response).await;
    assert_eq!(created["email"], "marta@brickdesk.io");
    assert_eq!(created["role"], "agent");
    assert_eq!(created["emailConfirmed"], true);

    // The invitee can sign in immediately but may not manage the team.
    let agent_token = login(&app, "marta@brickdesk.io", "marta-password").await;
    let response = post_json(
        &app,
        "/api/admin-users",
        &agent_token,
        serde_json::json!({
            "email": "intruder@brickdesk.io",
            "password": "intruder-password",
            "fullName": "Intruder",
            "role": "admin"
        }),
    )
    .await;
    assert_eq!(response.status(), 403);

    // The new member shows up in the team directory.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/profiles")
                .header(header::AUTHORIZATION, format!("Bearer {admin_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let team = body_json(response).await;
    let emails: Vec<&str> = team
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["email"].as_str().unwrap())
        .collect();
    assert!(emails.contains(&"marta@brickdesk.io"));
}

#[tokio::test]
async fn admin_cannot_delete_own_account() {
    let (app, _guard) = test_router().await;
    let admin_token = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/auth/me")
                .header(header::AUTHORIZATION, format!("Bearer {admin_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let me = body_json(response).await;
    let my_id = me["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/admin-users")
                .header(header::AUTHORIZATION, format!("Bearer {admin_token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({ "userId": my_id }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}
