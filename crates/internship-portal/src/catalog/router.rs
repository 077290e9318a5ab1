use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::error;

use super::domain::PostingUpsert;
use super::repository::PostingRepository;
use super::service::PostingCatalog;
use crate::http::{error_response, message_response, preflight_handler};

/// Router exposing the posting listing and the add/update endpoint.
pub fn catalog_router<R>(service: Arc<PostingCatalog<R>>) -> Router
where
    R: PostingRepository + 'static,
{
    Router::new()
        .route("/internships", get(list_handler::<R>))
        .route(
            "/add-internship",
            post(upsert_handler::<R>).options(preflight_handler),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<PostingCatalog<R>>>) -> Response
where
    R: PostingRepository + 'static,
{
    match service.list().await {
        Ok(postings) => (StatusCode::OK, Json(postings)).into_response(),
        Err(err) => {
            error!(error = %err, "failed to list postings");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

pub(crate) async fn upsert_handler<R>(
    State(service): State<Arc<PostingCatalog<R>>>,
    Json(posting): Json<PostingUpsert>,
) -> Response
where
    R: PostingRepository + 'static,
{
    match service.upsert(posting).await {
        Ok(_) => message_response("Internship added / updated successfully"),
        Err(err) => {
            error!(error = %err, "failed to upsert posting");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}
