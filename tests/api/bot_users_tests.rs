//! Stored Bot User API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use admin_telegram_bot::domain::ChatBotUser;

use crate::common::{json_body, TestApp};

fn seeded_app() -> TestApp {
    let app = TestApp::offline();
    let mut bot = ChatBotUser::new(42, true, "Seeded Bot");
    bot.username = Some("seeded_bot".to_string());
    app.chat_bot_users.insert(bot);
    app.chat_bot_users.insert(ChatBotUser::new(7, true, "Other Bot"));
    app
}

#[tokio::test]
async fn test_list_bot_users_ordered_by_id() {
    let app = seeded_app();

    let response = app.get("/api/telegram/bot-users").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![7, 42]);
}

#[tokio::test]
async fn test_get_bot_user_by_id() {
    let app = seeded_app();

    let response = app.get("/api/telegram/bot-users/42").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["firstName"], "Seeded Bot");
    assert_eq!(json["username"], "seeded_bot");
}

#[tokio::test]
async fn test_get_missing_bot_user_returns_404() {
    let app = seeded_app();

    let response = app.get("/api/telegram/bot-users/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_bot_user_with_invalid_id_returns_400() {
    let app = seeded_app();

    let response = app.get("/api/telegram/bot-users/not-a-number").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_delete_bot_user() {
    let app = seeded_app();

    let response = app.delete("/api/telegram/bot-users/42").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.delete("/api/telegram/bot-users/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(app.chat_bot_users.snapshot().len(), 1);
}

#[tokio::test]
async fn test_count_bot_users() {
    let app = seeded_app();

    let response = app.get("/api/telegram/bot-users/count").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!({ "count": 2 }));
}

#[tokio::test]
async fn test_delete_all_bot_users() {
    let app = seeded_app();

    let response = app.delete("/api/telegram/bot-users").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.get("/api/telegram/bot-users/count").await;
    assert_eq!(json_body(response).await["count"], 0);
}

#[tokio::test]
async fn test_update_bot_user_overwrites_editable_fields() {
    let app = seeded_app();

    let response = app
        .put_json(
            "/api/telegram/bot-users/42",
            r#"{"firstName":"Renamed Bot","languageCode":"de"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["id"], 42);
    assert_eq!(json["isBot"], true);
    assert_eq!(json["firstName"], "Renamed Bot");
    assert_eq!(json["username"], serde_json::Value::Null);
    assert_eq!(json["languageCode"], "de");

    let stored = app.chat_bot_users.snapshot();
    assert_eq!(stored[1].first_name, "Renamed Bot");
}

#[tokio::test]
async fn test_update_missing_bot_user_returns_404() {
    let app = seeded_app();

    let response = app
        .put_json("/api/telegram/bot-users/999", r#"{"firstName":"Ghost"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_blank_first_name_is_rejected() {
    let app = seeded_app();

    let response = app
        .put_json("/api/telegram/bot-users/42", r#"{"firstName":""}"#)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(app.chat_bot_users.snapshot()[1].first_name, "Seeded Bot");
}
