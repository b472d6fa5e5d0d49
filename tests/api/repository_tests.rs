//! PostgreSQL Repository Tests
//!
//! Need a reachable database: `DATABASE_URL=... cargo test -- --ignored`

use once_cell::sync::Lazy;
use pretty_assertions::assert_eq;
use sqlx::PgPool;
use tokio::sync::Mutex;

use admin_telegram_bot::domain::entities::{
    ChatBotUser, ChatBotUserRepository, ModerationDecision, ModerationResult,
};
use admin_telegram_bot::domain::ports::ContentRepository;
use admin_telegram_bot::infrastructure::database::run_migrations;
use admin_telegram_bot::infrastructure::repositories::{
    PgChatBotUserRepository, PgModerationRepository,
};

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPool::connect(&url).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

/// `delete_all` wipes the table, so chat bot user tests take turns.
static CHAT_BOT_USERS_TABLE: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Ids far above real Telegram ids so parallel runs do not collide.
fn unique_bot_id() -> i64 {
    let suffix = uuid::Uuid::new_v4().as_u128() as i64 & 0x0fff_ffff;
    9_000_000_000_000 + suffix
}

#[tokio::test]
#[ignore]
async fn test_upsert_is_idempotent_and_last_write_wins() {
    let _table = CHAT_BOT_USERS_TABLE.lock().await;
    let repo = PgChatBotUserRepository::new(test_pool().await);
    let id = unique_bot_id();

    let mut bot = ChatBotUser::new(id, true, "Before");
    repo.upsert(&bot).await.unwrap();
    bot.first_name = "After".to_string();
    bot.username = Some("after_bot".to_string());
    assert_eq!(repo.upsert(&bot).await.unwrap(), bot);

    let stored = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored, bot);

    assert!(repo.delete_by_id(id).await.unwrap());
    assert_eq!(repo.find_by_id(id).await.unwrap(), None);
}

#[tokio::test]
#[ignore]
async fn test_update_missing_user_is_not_found() {
    let _table = CHAT_BOT_USERS_TABLE.lock().await;
    let repo = PgChatBotUserRepository::new(test_pool().await);

    let result = repo.update(&ChatBotUser::new(unique_bot_id(), true, "Ghost")).await;

    assert!(result.is_err());
}

#[tokio::test]
#[ignore]
async fn test_update_keeps_is_bot() {
    let _table = CHAT_BOT_USERS_TABLE.lock().await;
    let repo = PgChatBotUserRepository::new(test_pool().await);
    let id = unique_bot_id();
    repo.upsert(&ChatBotUser::new(id, true, "Before")).await.unwrap();

    let mut edited = ChatBotUser::new(id, false, "After");
    edited.language_code = Some("en".to_string());
    let updated = repo.update(&edited).await.unwrap();

    assert!(updated.is_bot);
    assert_eq!(updated.first_name, "After");
    assert_eq!(updated.language_code.as_deref(), Some("en"));
    repo.delete_by_id(id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_count_and_delete_all() {
    let _table = CHAT_BOT_USERS_TABLE.lock().await;
    let repo = PgChatBotUserRepository::new(test_pool().await);
    repo.delete_all().await.unwrap();

    repo.upsert(&ChatBotUser::new(unique_bot_id(), true, "One")).await.unwrap();
    repo.upsert(&ChatBotUser::new(unique_bot_id(), true, "Two")).await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 2);
    assert_eq!(repo.find_all().await.unwrap().len(), 2);

    repo.delete_all().await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
#[ignore]
async fn test_moderation_result_replaced_per_request() {
    let repo = PgModerationRepository::new(test_pool().await);
    let request_id = format!("it-{}", uuid::Uuid::new_v4());

    repo.save_result(&ModerationResult {
        request_id: request_id.clone(),
        decision: ModerationDecision::Reject,
        reason: Some("content contains spam".to_string()),
    })
    .await
    .unwrap();
    repo.save_result(&ModerationResult {
        request_id: request_id.clone(),
        decision: ModerationDecision::Approve,
        reason: None,
    })
    .await
    .unwrap();

    let stored = repo.find_result(&request_id).await.unwrap().unwrap();
    assert_eq!(stored.decision, ModerationDecision::Approve);
    assert_eq!(stored.reason, None);
}
