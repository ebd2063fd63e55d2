use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub async fn health() -> Response {
    Json(json!({ "status": "ok" })).into_response()
}
