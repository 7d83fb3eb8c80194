//! API error type and HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use brickdesk_core::errors::{AuthError, DatabaseError, Error as CoreError};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    /// Response relayed verbatim from an upstream service.
    Upstream(StatusCode, serde_json::Value),
    Internal(String),
}

impl ApiError {
    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::Internal(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, json!({ "error": msg })),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, json!({ "error": msg })),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            ApiError::Upstream(status, body) => (status, body),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Database(DatabaseError::NotFound(msg)) => ApiError::NotFound(msg),
            CoreError::Database(DatabaseError::UniqueViolation(msg)) => {
                ApiError::BadRequest(format!("Already exists: {msg}"))
            }
            CoreError::Database(DatabaseError::ForeignKeyViolation(msg)) => {
                ApiError::BadRequest(format!("Unknown reference: {msg}"))
            }
            CoreError::Validation(err) => ApiError::BadRequest(err.to_string()),
            CoreError::Authorization(AuthError::Forbidden { role, action }) => {
                ApiError::Forbidden(format!("Role '{role}' is not allowed to {action}"))
            }
            CoreError::Authorization(err) => ApiError::Unauthorized(err.to_string()),
            CoreError::ConstraintViolation(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
