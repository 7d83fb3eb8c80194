mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request};
use tower::ServiceExt;

use common::{body_json, login, post_json, test_router, ADMIN_EMAIL, ADMIN_PASSWORD};

fn lead(name: &str, stage: &str, channel: &str, score: i32) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "phone": "+54 11 5555-0000",
        "project": "Torre Alvear",
        "agentType": "emprendimientos",
        "channel": channel,
        "score": score,
        "stage": stage
    })
}

async fn seed_leads(app: &axum::Router, token: &str) {
    for payload in [
        lead("Ana Diaz", "nuevo", "whatsapp", 85),
        lead("Bruno Sosa", "nuevo", "instagram", 55),
        lead("Carla, la de Palermo", "calificado", "whatsapp", 72),
        lead("Diego Paz", "visita", "facebook", 31),
    ] {
        let response = post_json(app, "/api/v1/leads", token, payload).await;
        assert_eq!(response.status(), 200);
    }
}

#[tokio::test]
async fn search_count_matches_filter_conjunction() {
    let (app, _guard) = test_router().await;
    let token = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    seed_leads(&app, &token).await;

    // stage AND channel must both hold.
    let response = post_json(
        &app,
        "/api/v1/leads/search",
        &token,
        serde_json::json!({ "filters": { "stage": "nuevo", "channel": "whatsapp" } }),
    )
    .await;
    assert_eq!(response.status(), 200);
    let rows = body_json(response).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);

    // Clearing filters restores the full count.
    let response = post_json(&app, "/api/v1/leads/search", &token, serde_json::json!({})).await;
    let rows = body_json(response).await;
    assert_eq!(rows.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn leads_envelope_carries_stats() {
    let (app, _guard) = test_router().await;
    let token = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    seed_leads(&app, &token).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/leads")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let envelope = body_json(response).await;
    assert_eq!(envelope["data"].as_array().unwrap().len(), 4);
    assert_eq!(envelope["stats"]["total"], 4);
    assert_eq!(envelope["stats"]["nuevo"], 2);
    assert_eq!(envelope["stats"]["calificado"], 1);
}

#[tokio::test]
async fn csv_export_has_header_plus_row_lines_and_quotes_commas() {
    let (app, _guard) = test_router().await;
    let token = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    seed_leads(&app, &token).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/leads/export")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .starts_with("text/csv"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(csv.trim_end().lines().count(), 4 + 1);
    assert!(csv.contains("\"Carla, la de Palermo\""));
}

#[tokio::test]
async fn stage_change_is_unconstrained_but_validated() {
    let (app, _guard) = test_router().await;
    let token = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let response = post_json(
        &app,
        "/api/v1/leads",
        &token,
        lead("Eva Ruiz", "cierre", "whatsapp", 90),
    )
    .await;
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap();

    // Backwards transition is allowed.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri(format!("/api/v1/leads/{id}/stage"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({ "stage": "nuevo" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated = body_json(response).await;
    assert_eq!(updated["stage"], "nuevo");

    // Out-of-range score is rejected at the boundary.
    let response = post_json(
        &app,
        "/api/v1/leads",
        &token,
        lead("Mal Score", "nuevo", "whatsapp", 150),
    )
    .await;
    assert_eq!(response.status(), 400);
}
