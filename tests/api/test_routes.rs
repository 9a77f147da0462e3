// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route tests for the form page, the JSON API and the health check
//!
//! These tests verify that:
//! - GET / renders the empty form
//! - POST / renders the error message with the matching status
//! - POST /v1/roast returns a report or a JSON error result, whatever the body
//! - A panicking provider still yields an error page or error result
//! - GET /health reports whether AI credentials are configured

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use async_trait::async_trait;
use std::sync::atomic::Ordering;
use tower::util::ServiceExt; // for `oneshot`
use website_roaster::{
    create_app, AiError, AiFailurePolicy, AppState, ContentFetchConfig, RoastProvider,
    RoastResult, RoastService,
};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{StubProvider, LANDING_PAGE, THIN_PAGE};

/// Helper: router backed by a stub provider
fn app_with_stub(succeed: bool) -> Router {
    let (provider, _) = StubProvider::new(succeed);
    let service = RoastService::with_provider(
        ContentFetchConfig::default(),
        Box::new(provider),
        AiFailurePolicy::Fallback,
    )
    .unwrap();
    create_app(AppState::new(service))
}

/// Provider that blows up mid-request
struct PanickingProvider;

#[async_trait]
impl RoastProvider for PanickingProvider {
    async fn roast(&self, _prompt: &str) -> Result<RoastResult, AiError> {
        panic!("provider exploded");
    }

    fn name(&self) -> &'static str {
        "panicking"
    }

    fn is_available(&self) -> bool {
        true
    }
}

fn panicking_app() -> Router {
    let service = RoastService::with_provider(
        ContentFetchConfig::default(),
        Box::new(PanickingProvider),
        AiFailurePolicy::Fallback,
    )
    .unwrap();
    create_app(AppState::new(service))
}

fn form_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn json_request(body: String) -> Request<Body> {
    raw_api_request("application/json", body)
}

fn raw_api_request(content_type: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/v1/roast")
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap()
}

async fn error_result(response: Response) -> String {
    assert_eq!(response.headers()["content-type"], "application/json");
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    let object = json.as_object().expect("error result is an object");
    assert_eq!(object.len(), 1);
    object["error"].as_str().expect("error is a string").to_string()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn serve_page(html: &'static str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string(html),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_index_renders_form() {
    let app = app_with_stub(true);
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<form"));
    assert!(html.contains(r#"name="url""#));
}

#[tokio::test]
async fn test_form_invalid_url_shows_error() {
    let app = app_with_stub(true);

    let response = app.oneshot(form_request("url=not+a+url")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let html = body_text(response).await;
    assert!(html.contains("Invalid URL"));
    // The submitted value is echoed back into the form
    assert!(html.contains("not a url"));
}

#[tokio::test]
async fn test_form_empty_url_asks_for_one() {
    let app = app_with_stub(true);

    let response = app.oneshot(form_request("url=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Please enter a URL"));
}

#[tokio::test]
async fn test_form_missing_field_asks_for_url() {
    let app = app_with_stub(true);

    let response = app.oneshot(form_request("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Please enter a URL"));
}

#[tokio::test]
async fn test_form_success_renders_roast() {
    let page = serve_page(LANDING_PAGE).await;
    let app = app_with_stub(true);

    let body = format!("url={}", page.uri());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("3/10"));
    assert!(html.contains("Connect Stripe free"));
}

#[tokio::test]
async fn test_form_ai_failure_renders_fallback_notice() {
    let page = serve_page(LANDING_PAGE).await;
    let app = app_with_stub(false);

    let body = format!("url={}", page.uri());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("4/10"));
    assert!(html.contains("The AI reviewer is unavailable right now"));
}

#[tokio::test]
async fn test_api_invalid_url_returns_error_result() {
    let app = app_with_stub(true);

    let response = app
        .oneshot(json_request(r#"{"url": "not a url"}"#.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "Invalid URL" }));
}

#[tokio::test]
async fn test_api_missing_url_asks_for_one() {
    let app = app_with_stub(true);

    let response = app.oneshot(json_request("{}".to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_result(response).await, "Please enter a URL");
}

#[tokio::test]
async fn test_api_unparseable_body_returns_error_result() {
    let app = app_with_stub(true);

    let response = app
        .oneshot(json_request("not json".to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!error_result(response).await.is_empty());
}

#[tokio::test]
async fn test_api_wrong_content_type_returns_error_result() {
    let app = app_with_stub(true);

    let response = app
        .oneshot(raw_api_request(
            "text/plain",
            r#"{"url": "https://example.com"}"#.to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_result(response).await.contains("Content-Type"));
}

#[tokio::test]
async fn test_api_wrong_field_type_returns_error_result() {
    let app = app_with_stub(true);

    let response = app
        .oneshot(json_request(r#"{"url": 42}"#.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!error_result(response).await.is_empty());
}

#[tokio::test]
async fn test_form_panic_renders_form_with_error() {
    let page = serve_page(LANDING_PAGE).await;
    let app = panicking_app();

    let body = format!("url={}", page.uri());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let html = body_text(response).await;
    assert!(html.contains("<form"));
    assert!(html.contains("Internal error: provider exploded"));
}

#[tokio::test]
async fn test_api_panic_returns_error_result() {
    let page = serve_page(LANDING_PAGE).await;
    let app = panicking_app();

    let response = app
        .oneshot(json_request(format!(r#"{{"url": "{}"}}"#, page.uri())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        error_result(response).await,
        "Internal error: provider exploded"
    );
}

#[tokio::test]
async fn test_api_thin_page_is_unprocessable() {
    let page = serve_page(THIN_PAGE).await;
    let (provider, calls) = StubProvider::new(true);
    let service = RoastService::with_provider(
        ContentFetchConfig::default(),
        Box::new(provider),
        AiFailurePolicy::Fallback,
    )
    .unwrap();
    let app = create_app(AppState::new(service));

    let response = app
        .oneshot(json_request(format!(r#"{{"url": "{}"}}"#, page.uri())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["error"], "Not enough readable content");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_api_success_returns_report() {
    let page = serve_page(LANDING_PAGE).await;
    let app = app_with_stub(true);

    let response = app
        .oneshot(json_request(format!(r#"{{"url": "{}"}}"#, page.uri())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["source"], "ai");
    assert_eq!(json["url"], page.uri());
    assert_eq!(json["roast"]["cta_fix"], "Connect Stripe free");
    assert!(json["requestId"].is_string());
    assert!(json["generatedAt"].is_string());
}

#[tokio::test]
async fn test_health_reports_ai_configuration() {
    let app = app_with_stub(false);
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["aiConfigured"], false);
    assert_eq!(json["version"]["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = app_with_stub(true);
    let request = Request::builder()
        .uri("/v1/unknown")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
