use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::error;

use super::domain::ApplicationSubmission;
use super::repository::ApplicationRepository;
use super::service::{ApplicationService, ApplicationServiceError};
use crate::http::{error_response, message_response, preflight_handler};

/// Router exposing the apply endpoint and the application listing.
pub fn application_router<R>(service: Arc<ApplicationService<R>>) -> Router
where
    R: ApplicationRepository + 'static,
{
    Router::new()
        .route("/apply", post(apply_handler::<R>).options(preflight_handler))
        .route("/applications", get(list_handler::<R>))
        .with_state(service)
}

pub(crate) async fn apply_handler<R>(
    State(service): State<Arc<ApplicationService<R>>>,
    Json(submission): Json<ApplicationSubmission>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.apply(submission).await {
        Ok(_) => message_response("Application submitted successfully"),
        Err(ApplicationServiceError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "Internship not found")
        }
        Err(ApplicationServiceError::NoCapacity(_)) => {
            error_response(StatusCode::BAD_REQUEST, "No slots available")
        }
        Err(other) => {
            error!(error = %other, "apply failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<ApplicationService<R>>>) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.list().await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => {
            error!(error = %err, "failed to list applications");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}
