use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::error;

use super::domain::{LoginRequest, SignupRequest, UserView};
use super::repository::UserRepository;
use super::service::{AccountService, AccountServiceError};
use crate::http::{error_response, message_response, preflight_handler};

/// Router exposing signup and login.
pub fn account_router<R>(service: Arc<AccountService<R>>) -> Router
where
    R: UserRepository + 'static,
{
    Router::new()
        .route("/signup", post(signup_handler::<R>).options(preflight_handler))
        .route("/login", post(login_handler::<R>).options(preflight_handler))
        .with_state(service)
}

pub(crate) async fn signup_handler<R>(
    State(service): State<Arc<AccountService<R>>>,
    Json(request): Json<SignupRequest>,
) -> Response
where
    R: UserRepository + 'static,
{
    match service.signup(request).await {
        Ok(_) => message_response("Signup successful"),
        Err(AccountServiceError::DuplicateEmail(_)) => {
            error_response(StatusCode::BAD_REQUEST, "User already exists")
        }
        Err(other) => {
            error!(error = %other, "signup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

pub(crate) async fn login_handler<R>(
    State(service): State<Arc<AccountService<R>>>,
    Json(request): Json<LoginRequest>,
) -> Response
where
    R: UserRepository + 'static,
{
    match service.login(request).await {
        Ok(Some(user)) => {
            let payload = json!({
                "message": "Login successful",
                "user": UserView::from(&user),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Ok(None) => error_response(StatusCode::UNAUTHORIZED, "Invalid credentials"),
        Err(other) => {
            error!(error = %other, "login failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}
