//! Error → HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use stockgrid_auth::AuthzError;
use stockgrid_core::DomainError;

/// Uniform error body: `{ "error": code, "message": text }`.
pub fn json_error(status: StatusCode, code: &str, message: impl AsRef<str>) -> Response {
    (status, Json(json!({ "error": code, "message": message.as_ref() }))).into_response()
}

pub fn domain_error(err: DomainError) -> Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "resource not found"),
        DomainError::MissingReference(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "missing_reference", msg)
        }
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::Unauthorized => {
            json_error(StatusCode::UNAUTHORIZED, "unauthorized", "invalid credentials")
        }
    }
}

pub fn forbidden(_err: AuthzError) -> Response {
    json_error(StatusCode::FORBIDDEN, "forbidden", "permission denied")
}
