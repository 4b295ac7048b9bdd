use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod support;

use support::{body_string, test_app, StubAuthService, LIVE_TOKEN};

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn login_page_renders_form() {
    let app = test_app(Arc::new(StubAuthService::new()));
    let response = app
        .oneshot(Request::builder().uri("/login").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Sign in to Acme Console"));
    assert!(html.contains("action=\"/auth/login\""));
}

#[tokio::test]
async fn successful_login_sets_cookie_and_redirects_to_dashboard() {
    let auth = Arc::new(StubAuthService::new().with_account("ada@example.com", "pw", LIVE_TOKEN));
    let response = test_app(auth.clone())
        .oneshot(post_form(
            "/auth/login",
            "email=ada%40example.com&password=pw",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/dashboard");
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.starts_with(&format!("access_token={}", LIVE_TOKEN)));
    assert!(cookie.contains("Max-Age=900"));
    assert!(cookie.contains("HttpOnly"));
    assert_eq!(auth.sign_ins(), vec!["ada@example.com".to_string()]);
}

#[tokio::test]
async fn invalid_credentials_rerender_login_with_error() {
    let auth = Arc::new(StubAuthService::new().with_account("ada@example.com", "pw", LIVE_TOKEN));
    let response = test_app(auth)
        .oneshot(post_form(
            "/auth/login",
            "email=ada%40example.com&password=wrong",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let html = body_string(response).await;
    assert!(html.contains("Invalid email or password."));
    assert!(html.contains("ada@example.com"));
}

#[tokio::test]
async fn empty_fields_are_rejected_before_contacting_service() {
    let auth = Arc::new(StubAuthService::new());
    let response = test_app(auth.clone())
        .oneshot(post_form("/auth/login", "email=&password="))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_string(response).await;
    assert!(html.contains("Enter your email and password."));
    assert!(auth.sign_ins().is_empty());
}

#[tokio::test]
async fn login_outage_is_an_internal_error() {
    let auth = Arc::new(StubAuthService::new().failing());
    let response = test_app(auth)
        .oneshot(post_form(
            "/auth/login",
            "email=ada%40example.com&password=pw",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn logout_revokes_session_and_clears_cookie() {
    let auth = Arc::new(StubAuthService::new());
    let response = test_app(auth.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/logout")
                .header(header::COOKIE, format!("access_token={}", LIVE_TOKEN))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("access_token=;"));
    assert!(cookie.contains("Max-Age=0"));
    assert_eq!(auth.sign_outs(), vec![LIVE_TOKEN.to_string()]);
}

#[tokio::test]
async fn logout_still_clears_cookie_when_service_fails() {
    let auth = Arc::new(StubAuthService::new().failing());
    let response = test_app(auth)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/logout")
                .header(header::COOKIE, format!("access_token={}", LIVE_TOKEN))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(response.headers().get(header::SET_COOKIE).is_some());
}
