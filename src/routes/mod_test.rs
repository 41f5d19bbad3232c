use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;

async fn post_json(router: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

// =============================================================================
// /api/signup
// =============================================================================

#[tokio::test]
async fn signup_returns_created_with_message() {
    let router = app(AppState::new());
    let (status, body) = post_json(router, "/api/signup", r#"{"email":"a@b.com","password":"pw"}"#).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully");
}

#[tokio::test]
async fn duplicate_signup_returns_400_with_message() {
    let state = AppState::new();
    post_json(app(state.clone()), "/api/signup", r#"{"email":"a@b.com","password":"pw"}"#).await;

    let (status, body) = post_json(app(state), "/api/signup", r#"{"email":"a@b.com","password":"pw"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User already exists");
}

#[tokio::test]
async fn signup_with_missing_password_returns_400() {
    let (status, body) = post_json(app(AppState::new()), "/api/signup", r#"{"email":"a@b.com"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email and password are required");
}

#[tokio::test]
async fn signup_with_malformed_json_returns_400() {
    let (status, body) = post_json(app(AppState::new()), "/api/signup", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email and password are required");
}

// =============================================================================
// /api/login
// =============================================================================

#[tokio::test]
async fn login_after_signup_returns_access_token() {
    let state = AppState::new();
    post_json(app(state.clone()), "/api/signup", r#"{"email":"a@b.com","password":"pw"}"#).await;

    let (status, body) = post_json(app(state), "/api/login", r#"{"email":"a@b.com","password":"pw"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["access_token"].as_str().map(str::len), Some(64));
}

#[tokio::test]
async fn login_with_wrong_password_returns_401() {
    let state = AppState::new();
    post_json(app(state.clone()), "/api/signup", r#"{"email":"a@b.com","password":"pw"}"#).await;

    let (status, body) = post_json(app(state), "/api/login", r#"{"email":"a@b.com","password":"bad"}"#).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");
}

// =============================================================================
// /healthz
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let response = app(AppState::new()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
