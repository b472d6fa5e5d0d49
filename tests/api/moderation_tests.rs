//! Moderation API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::{json_body, TestApp};

#[test_case("Hello there, friends", "APPROVE", None ; "plain content is approved")]
#[test_case("Buy SPAM today", "REJECT", Some("content contains spam") ; "spam is rejected")]
#[test_case("hey", "REJECT", Some("content is too short") ; "short content is rejected")]
#[test_case("   ", "HOLD", Some("content is blank") ; "blank content is held")]
#[tokio::test]
async fn test_moderate_decisions(content: &str, decision: &str, reason: Option<&str>) {
    let app = TestApp::offline();
    let body = json!({ "id": "req-1", "content": content, "authorId": "user-9" }).to_string();

    let response = app.post_json("/api/moderation", &body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "requestId": "req-1", "decision": decision, "reason": reason })
    );
}

#[tokio::test]
async fn test_moderation_result_can_be_fetched_and_is_replaced() {
    let app = TestApp::offline();
    app.post_json("/api/moderation", r#"{"id":"req-2","content":"spam spam"}"#)
        .await;
    app.post_json("/api/moderation", r#"{"id":"req-2","content":"all good here"}"#)
        .await;

    let response = app.get("/api/moderation/req-2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["decision"], "APPROVE");
    assert_eq!(json["reason"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_unknown_moderation_result_returns_404() {
    let app = TestApp::offline();

    let response = app.get("/api/moderation/missing").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_empty_request_id_is_rejected() {
    let app = TestApp::offline();

    let response = app
        .post_json("/api/moderation", r#"{"id":"","content":"hello world"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "VALIDATION_ERROR");
}
