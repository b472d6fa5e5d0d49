//! Chat Bot User Repository Implementation
//!
//! PostgreSQL implementation of the ChatBotUserRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{ChatBotUser, ChatBotUserRepository};
use crate::shared::error::AppError;

/// Insert-or-update keyed by id. `is_bot` keeps its first stored value.
pub(crate) const UPSERT_SQL: &str = r#"
    INSERT INTO chat_bot_users (id, is_bot, first_name, last_name, username, language_code)
    VALUES ($1, $2, $3, $4, $5, $6)
    ON CONFLICT (id) DO UPDATE
    SET first_name = EXCLUDED.first_name,
        last_name = EXCLUDED.last_name,
        username = EXCLUDED.username,
        language_code = EXCLUDED.language_code,
        updated_at = NOW()
"#;

/// Database row representation of the chat_bot_users table.
#[derive(Debug, sqlx::FromRow)]
struct ChatBotUserRow {
    id: i64,
    is_bot: bool,
    first_name: String,
    last_name: Option<String>,
    username: Option<String>,
    language_code: Option<String>,
}

impl ChatBotUserRow {
    /// Convert database row to domain entity.
    fn into_user(self) -> ChatBotUser {
        ChatBotUser {
            id: self.id,
            is_bot: self.is_bot,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            language_code: self.language_code,
        }
    }
}

/// PostgreSQL chat bot user repository implementation.
#[derive(Clone)]
pub struct PgChatBotUserRepository {
    pool: PgPool,
}

impl PgChatBotUserRepository {
    /// Create a new PgChatBotUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatBotUserRepository for PgChatBotUserRepository {
    async fn upsert(&self, user: &ChatBotUser) -> Result<ChatBotUser, AppError> {
        sqlx::query(UPSERT_SQL)
            .bind(user.id)
            .bind(user.is_bot)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.username)
            .bind(&user.language_code)
            .execute(&self.pool)
            .await?;

        tracing::debug!(bot_id = user.id, "Chat bot user upserted");

        Ok(user.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ChatBotUser>, AppError> {
        let row = sqlx::query_as::<_, ChatBotUserRow>(
            r#"
            SELECT id, is_bot, first_name, last_name, username, language_code
            FROM chat_bot_users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn find_all(&self) -> Result<Vec<ChatBotUser>, AppError> {
        let rows = sqlx::query_as::<_, ChatBotUserRow>(
            r#"
            SELECT id, is_bot, first_name, last_name, username, language_code
            FROM chat_bot_users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_user()).collect())
    }

    async fn update(&self, user: &ChatBotUser) -> Result<ChatBotUser, AppError> {
        let row = sqlx::query_as::<_, ChatBotUserRow>(
            r#"
            UPDATE chat_bot_users
            SET first_name = $2,
                last_name = $3,
                username = $4,
                language_code = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, is_bot, first_name, last_name, username, language_code
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.language_code)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Chat bot user with id {} not found", user.id)))?;

        Ok(row.into_user())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM chat_bot_users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM chat_bot_users")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM chat_bot_users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
