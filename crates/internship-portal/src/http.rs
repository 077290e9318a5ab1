use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

/// Acknowledge a bare `OPTIONS` request on a mutating route.
pub(crate) async fn preflight_handler() -> Json<Value> {
    Json(json!({ "message": "OK" }))
}

pub(crate) fn message_response(message: &str) -> Response {
    (StatusCode::OK, Json(json!({ "message": message }))).into_response()
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}
