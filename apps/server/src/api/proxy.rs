//! Stateless pass-throughs to upstream valuation, scraper and automation
//! services. Secrets live in the server's environment and are attached here
//! so they never reach the browser.
//!
//! Environment is read per request: rotating a key or URL takes effect
//! without a restart. Upstream status and JSON are relayed verbatim;
//! non-JSON upstream text is wrapped as `{"status":"ok","raw":…}`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

fn env_url(key: &str, service: &str) -> Result<String, ApiError> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::internal(format!("{service} not configured ({key} missing)")))
}

fn unavailable(service: &str, err: &reqwest::Error) -> ApiError {
    ApiError::Internal(format!("{service} unavailable: {err}"))
}

/// Relays the upstream response: same status, JSON body passed through,
/// non-JSON text wrapped.
async fn relay(service: &str, response: reqwest::Response) -> ApiResult<Response> {
    let status =
        StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let text = response
        .text()
        .await
        .map_err(|e| unavailable(service, &e))?;
    let body = match serde_json::from_str::<Value>(&text) {
        Ok(value) => value,
        Err(_) => json!({ "status": "ok", "raw": text }),
    };
    Ok((status, Json(body)).into_response())
}

/// `POST /api/estimate` — forwards a valuation request to the internal
/// estimate host.
async fn estimate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> ApiResult<Response> {
    let url = env_url("ESTIMATE_URL", "estimate service")?;
    let response = state
        .http
        .post(&url)
        .json(&payload)
        .send()
        .await
        .map_err(|e| unavailable("estimate service", &e))?;
    relay("estimate service", response).await
}

/// `POST /api/estimate-formal` — forwards to the scraper service with the
/// shared API key attached.
async fn estimate_formal(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> ApiResult<Response> {
    let base = env_url("SCRAPER_URL", "scraper service")?;
    let api_key = env_url("SCRAPER_API_KEY", "scraper service")?;
    let response = state
        .http
        .post(format!("{base}/estimate-formal"))
        .header("x-api-key", api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| unavailable("scraper service", &e))?;
    relay("scraper service", response).await
}

/// `POST /api/upload-evidence-form` — multipart passthrough: the raw body
/// and content-type go to the scraper untouched.
async fn upload_evidence_form(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let base = env_url("SCRAPER_URL", "scraper service")?;
    let api_key = env_url("SCRAPER_API_KEY", "scraper service")?;
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();
    let response = state
        .http
        .post(format!("{base}/upload-evidence-form"))
        .header("x-api-key", api_key)
        .header(header::CONTENT_TYPE, content_type)
        .body(body.to_vec())
        .send()
        .await
        .map_err(|e| unavailable("scraper service", &e))?;
    relay("scraper service", response).await
}

async fn automation_relay(
    state: &AppState,
    path: &str,
    payload: Value,
) -> ApiResult<Response> {
    let base = env_url("AUTOMATION_WEBHOOK_URL", "automation webhook")?;
    let key = env_url("AUTOMATION_WEBHOOK_KEY", "automation webhook")?;
    let response = state
        .http
        .post(format!("{base}/{path}"))
        .header("x-webhook-key", key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| unavailable("automation webhook", &e))?;
    relay("automation webhook", response).await
}

async fn regenerate_draft(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> ApiResult<Response> {
    automation_relay(&state, "regenerate-draft", payload).await
}

async fn send_approved(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> ApiResult<Response> {
    automation_relay(&state, "send-approved", payload).await
}

/// `POST /api/tasacion-webhook` — best-effort fire to the automation
/// webhook. Always answers 200 so the caller is never blocked; `queued`
/// reflects the true outcome.
async fn tasacion_webhook(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Json<Value> {
    let (Ok(base), Ok(key)) = (
        env_url("AUTOMATION_WEBHOOK_URL", "automation webhook"),
        env_url("AUTOMATION_WEBHOOK_KEY", "automation webhook"),
    ) else {
        return Json(json!({ "queued": false, "reason": "not configured" }));
    };

    let result = state
        .http
        .post(format!("{base}/tasacion"))
        .header("x-webhook-key", key)
        .json(&payload)
        .send()
        .await;

    match result {
        Ok(response) if response.status().is_success() => Json(json!({ "queued": true })),
        Ok(response) => {
            tracing::warn!("tasacion webhook rejected: {}", response.status());
            Json(json!({ "queued": false, "reason": format!("upstream {}", response.status()) }))
        }
        Err(e) => {
            tracing::warn!("tasacion webhook unreachable: {e}");
            Json(json!({ "queued": false, "reason": e.to_string() }))
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/estimate", post(estimate))
        .route("/estimate-formal", post(estimate_formal))
        .route("/upload-evidence-form", post(upload_evidence_form))
        .route("/regenerate-draft", post(regenerate_draft))
        .route("/send-approved", post(send_approved))
        .route("/tasacion-webhook", post(tasacion_webhook))
}
