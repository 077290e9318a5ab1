use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::accounts::{account_router, AccountService};
use crate::test_support::{read_json_body, MemoryStore};

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn signup_body() -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@x.com",
        "password": "engine",
    })
}

#[tokio::test]
async fn signup_and_login_follow_the_wire_contract() {
    let router = account_router(Arc::new(AccountService::new(Arc::new(
        MemoryStore::default(),
    ))));

    let response = router
        .clone()
        .oneshot(post_json("/signup", signup_body()))
        .await
        .expect("signup responds");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json_body(response).await,
        json!({ "message": "Signup successful" })
    );

    let response = router
        .oneshot(post_json(
            "/login",
            json!({ "email": "ada@x.com", "password": "engine" }),
        ))
        .await
        .expect("login responds");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json_body(response).await,
        json!({
            "message": "Login successful",
            "user": { "firstName": "Ada", "lastName": "Lovelace", "email": "ada@x.com" },
        })
    );
}

#[tokio::test]
async fn duplicate_signup_is_bad_request() {
    let router = account_router(Arc::new(AccountService::new(Arc::new(
        MemoryStore::default(),
    ))));

    router
        .clone()
        .oneshot(post_json("/signup", signup_body()))
        .await
        .expect("first signup");
    let response = router
        .oneshot(post_json("/signup", signup_body()))
        .await
        .expect("second signup");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json_body(response).await,
        json!({ "error": "User already exists" })
    );
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let router = account_router(Arc::new(AccountService::new(Arc::new(
        MemoryStore::default(),
    ))));

    router
        .clone()
        .oneshot(post_json("/signup", signup_body()))
        .await
        .expect("signup");
    let response = router
        .oneshot(post_json(
            "/login",
            json!({ "email": "ada@x.com", "password": "wrong" }),
        ))
        .await
        .expect("login responds");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        read_json_body(response).await,
        json!({ "error": "Invalid credentials" })
    );
}

#[tokio::test]
async fn signup_and_login_answer_options() {
    let router = account_router(Arc::new(AccountService::new(Arc::new(
        MemoryStore::default(),
    ))));

    for uri in ["/signup", "/login"] {
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(read_json_body(response).await, json!({ "message": "OK" }));
    }
}
