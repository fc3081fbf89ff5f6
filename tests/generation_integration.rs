//! HTTP-level integration tests
//!
//! These tests drive the full axum router in-process with `oneshot`,
//! without binding a socket.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use indexmap::IndexMap;
use serde_json::{json, Value};
use tower::ServiceExt;

use route_scaffold_generator::config::Settings;
use route_scaffold_generator::generator::BatchPolicy;
use route_scaffold_generator::scaffold::DEFAULT_IDENTIFIERS;
use route_scaffold_generator::server::{create_app, AppState};

const BODY_LIMIT: usize = 1024 * 1024;

fn app_with(settings: Settings) -> Router {
    create_app(AppState::new(settings).unwrap())
}

fn app() -> Router {
    app_with(Settings::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    (status, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_generate_default_scaffolds() {
    let (status, body) = send(app(), get("/generate")).await;
    assert_eq!(status, StatusCode::OK);

    let result: IndexMap<String, String> = serde_json::from_slice(&body).unwrap();
    let keys: Vec<_> = result.keys().map(String::as_str).collect();
    assert_eq!(keys, DEFAULT_IDENTIFIERS);

    for (identifier, rendered) in &result {
        let route = format!("@app.route('/{}', methods=['POST'])", identifier);
        assert!(rendered.contains(&route), "missing route for {identifier}");
    }
}

#[tokio::test]
async fn test_generate_configured_identifiers_and_template() {
    let mut settings = Settings::default();
    settings.generator.template = "route for {{a}}".to_string();
    settings.generator.identifiers = vec!["credit".to_string(), "debit".to_string()];

    let (status, body) = send(app_with(settings), get("/generate")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"{"credit":"route for credit","debit":"route for debit"}"#
    );
}

#[tokio::test]
async fn test_generate_default_fail_fast_unbound_variable() {
    let mut settings = Settings::default();
    settings.generator.template = "{{a}}-{{b}}".to_string();

    let (status, body) = send(app_with(settings), get("/generate")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"]["code"], "UNBOUND_VARIABLE");
    assert_eq!(body["error"]["message"], "Unbound variable: b");
}

#[tokio::test]
async fn test_generate_default_skip_failed_returns_successes_only() {
    let mut settings = Settings::default();
    settings.generator.template = "{{a}}-{{b}}".to_string();
    settings.generator.policy = BatchPolicy::SkipFailed;

    let (status, body) = send(app_with(settings), get("/generate")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), "{}");
}

#[tokio::test]
async fn test_generate_custom_batch() {
    let request = post_json(
        "/api/v1/generate",
        json!({
            "template": "{{a}} and {{ a }}",
            "identifiers": ["x", "y", "x"]
        }),
    );

    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"{"outputs":{"x":"x and x","y":"y and y"}}"#
    );
}

#[tokio::test]
async fn test_generate_custom_skip_failed_reports_failures() {
    let request = post_json(
        "/api/v1/generate",
        json!({
            "template": "{{a}}-{{b}}",
            "identifiers": ["credit"],
            "policy": "skip_failed"
        }),
    );

    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["outputs"], json!({}));
    assert_eq!(body["failures"][0]["identifier"], "credit");
    assert_eq!(body["failures"][0]["code"], "UNBOUND_VARIABLE");
}

#[tokio::test]
async fn test_generate_custom_malformed_template() {
    let request = post_json(
        "/api/v1/generate",
        json!({ "template": "{{unterminated", "identifiers": ["credit"] }),
    );

    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"]["code"], "MALFORMED_TEMPLATE");
}

#[tokio::test]
async fn test_generate_custom_rejects_empty_identifiers() {
    let request = post_json(
        "/api/v1/generate",
        json!({ "template": "{{a}}", "identifiers": [] }),
    );

    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_inspect_template_lists_variables() {
    let request = post_json(
        "/api/v1/templates/inspect",
        json!({ "template": "{{b}} {{a}} {{b}}" }),
    );

    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "variables": ["a", "b"] }));
}

#[tokio::test]
async fn test_api_key_required_when_configured() {
    let mut settings = Settings::default();
    settings.api.key = Some("secret".to_string());
    let app = app_with(settings);
    let payload = json!({ "template": "{{a}}", "identifiers": ["x"] });

    let (status, _) = send(app.clone(), post_json("/api/v1/generate", payload.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let mut request = post_json("/api/v1/generate", payload);
    request
        .headers_mut()
        .insert("X-API-Key", "secret".parse().unwrap());
    let (status, _) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::OK);

    // The configured scaffold endpoint stays open
    let (status, _) = send(app, get("/generate")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_reports_generator() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["generator"]["variable"], "a");
    assert_eq!(body["generator"]["policy"], "fail_fast");
    assert_eq!(body["generator"]["identifiers"], 5);
    assert_eq!(body["generator"]["template_variables"], json!(["a"]));
}

#[tokio::test]
async fn test_metrics_exposes_generation_counters() {
    let app = app();
    let (status, _) = send(app.clone(), get("/generate")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app, get("/metrics")).await;
    assert_eq!(status, StatusCode::OK);

    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("scaffold_generation_batches_total"));
    assert!(text.contains("scaffold_http_requests_total"));
}
