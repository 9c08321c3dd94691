/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Integration tests for the `/session` and `/profile` endpoints.


use axum::body::Body;
use axum::http::StatusCode;
use test_helpers::*;
use tower::ServiceExt;
use videomeet_types::responses::{APIResponse, ProfileResponse};
use videomeet_types::APIError;

#[tokio::test]
async fn test_session_ok_when_signed_in() {
    let app = build_app();
    let req = request_with_session("GET", "/session", "u1", Some("alice"))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_session_unauthorized_when_signed_out() {
    let app = build_app();
    let req = anonymous_request("GET", "/session")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: APIResponse<APIError> = response_json(resp).await;
    assert_eq!(body.result.code, "UNAUTHORIZED");
}

#[tokio::test]
async fn test_profile_returns_session_user() {
    let app = build_app();
    let req = request_with_session("GET", "/profile", "u1", Some("alice"))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: APIResponse<ProfileResponse> = response_json(resp).await;
    assert!(body.success);
    assert_eq!(body.result.user_id, "u1");
    assert_eq!(body.result.username.as_deref(), Some("alice"));
    assert_eq!(
        body.result.image_url.as_deref(),
        Some("https://img.example/u1.png")
    );
}

#[tokio::test]
async fn test_profile_without_username() {
    let app = build_app();
    let req = request_with_session("GET", "/profile", "u2", None)
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    let body: APIResponse<ProfileResponse> = response_json(resp).await;
    assert_eq!(body.result.user_id, "u2");
    assert!(body.result.username.is_none());
}
