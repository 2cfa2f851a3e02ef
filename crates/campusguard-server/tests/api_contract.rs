//! API contract tests — drive the router in-process and check status codes
//! and JSON shapes that existing clients depend on.

use std::io::Write;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use campusguard_core::GuardConfig;
use campusguard_scan::{ModerationPolicy, PiiProfile};
use campusguard_server::{build_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_router(Arc::new(AppState::new(
        GuardConfig::default(),
        ModerationPolicy::default(),
    )))
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .expect("request success");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn scan(body: Value) -> (StatusCode, Value) {
    send(app(), Method::POST, "/api/scan", Body::from(body.to_string())).await
}

#[tokio::test]
async fn clean_post_is_approved() {
    let (status, body) = scan(json!({
        "content": "Had a great day at the library!",
        "type": "post",
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "result": {
                "status": "approved",
                "reason": "No violations detected",
                "confidence": 1.0,
                "details": {
                    "keywords_found": [],
                    "category": "unknown",
                    "has_pii": false,
                }
            }
        })
    );
}

#[tokio::test]
async fn keyword_post_goes_to_review() {
    let (status, body) = scan(json!({
        "content": "I want to kill this assignment",
        "type": "post",
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let result = &body["result"];
    assert_eq!(result["status"], "review");
    assert_eq!(result["reason"], "Requires human review (violence)");
    let confidence = result["confidence"].as_f64().unwrap();
    assert!((confidence - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(result["details"]["keywords_found"], json!(["kill"]));
    assert_eq!(result["details"]["category"], "violence");
}

#[tokio::test]
async fn phone_number_is_rejected() {
    let (status, body) = scan(json!({ "content": "Call me at 555-123-4567", "type": "post" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["status"], "rejected");
    assert_eq!(body["result"]["reason"], "Contains personal information");
    assert_eq!(body["result"]["confidence"], 1.0);
    assert_eq!(body["result"]["details"]["has_pii"], true);
}

#[tokio::test]
async fn self_harm_is_flagged() {
    let (status, body) = scan(json!({ "content": "I want to kill myself", "type": "post" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["status"], "flagged");
    assert_eq!(body["result"]["reason"], "Self-harm content detected");
    assert_eq!(body["result"]["details"]["category"], "self_harm");
}

#[tokio::test]
async fn original_function_path_is_served() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/functions/v1/ai-scan-content",
        Body::from(json!({ "content": "see you at office hours", "type": "comment" }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["result"]["status"], "approved");
}

#[tokio::test]
async fn oversized_post_names_the_limit() {
    let (status, body) = scan(json!({ "content": "a".repeat(1001), "type": "post" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("1000"));
}

#[tokio::test]
async fn oversized_comment_names_the_limit() {
    let (status, body) = scan(json!({ "content": "a".repeat(501), "type": "comment" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Content exceeds 500 characters" })
    );
}

#[tokio::test]
async fn missing_or_mistyped_content_is_bad_request() {
    for request in [json!({ "type": "post" }), json!({ "content": 7 }), json!({ "content": "" })] {
        let (status, body) = scan(request.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{request}");
        assert_eq!(body["error"], "Content is required");
    }
}

#[tokio::test]
async fn malformed_body_is_internal_error_without_detail() {
    let (status, body) = send(app(), Method::POST, "/api/scan", Body::from("{not json")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Internal server error" })
    );
}

#[tokio::test]
async fn identical_requests_get_identical_responses() {
    let request = json!({ "content": "stalker leaked my dorm 305 info", "type": "post" });
    let first = scan(request.clone()).await;
    let second = scan(request).await;
    assert_eq!(first, second);
    assert_eq!(first.1["result"]["status"], "rejected");
}

#[tokio::test]
async fn preflight_allows_any_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/functions/v1/ai-scan-content")
                .header("origin", "https://campus.example")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("request success");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn health_and_policy_and_crisis_resources() {
    let (status, health) = send(app(), Method::GET, "/api/health", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");

    let (status, policy) = send(app(), Method::GET, "/api/policy", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(policy["piiProfile"], "full");
    assert_eq!(policy["thresholds"]["auto_approve"], 0.3);
    assert_eq!(policy["limits"]["max_post_length"], 1000);

    let (status, crisis) = send(app(), Method::GET, "/api/crisis-resources", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(crisis["resources"][0]["phone"], "988");
}

#[tokio::test]
async fn policy_file_from_config_is_applied() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "pii_profile": "minimal", "limits": {{ "max_comment_length": 20 }} }}"#
    )
    .unwrap();

    let config = GuardConfig {
        policy_file: Some(file.path().to_path_buf()),
        ..GuardConfig::default()
    };
    let state = AppState::from_config(config).unwrap();
    assert_eq!(state.moderator.policy().pii_profile, PiiProfile::Minimal);
    let app = build_router(Arc::new(state));

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/scan",
        Body::from(json!({ "content": "meet me in room 214", "type": "post" }).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["status"], "approved");

    let (status, body) = send(
        app,
        Method::POST,
        "/api/scan",
        Body::from(json!({ "content": "a".repeat(21), "type": "comment" }).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Content exceeds 20 characters");
}

#[test]
fn invalid_policy_file_fails_startup() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "thresholds": {{ "auto_reject": 2.0 }} }}"#).unwrap();

    let config = GuardConfig {
        policy_file: Some(file.path().to_path_buf()),
        ..GuardConfig::default()
    };
    assert!(AppState::from_config(config).is_err());
}
