//! Chat bot user entity and repository trait.
//!
//! Maps to the `chat_bot_users` table in the database schema.

use async_trait::async_trait;

use crate::shared::error::AppError;

/// Identity of a Telegram bot as reported by `getMe`.
///
/// Maps to the `chat_bot_users` table:
/// - id: BIGINT PRIMARY KEY (Telegram user id)
/// - is_bot: BOOLEAN NOT NULL
/// - first_name: VARCHAR(255) NOT NULL
/// - last_name: VARCHAR(255) NULL
/// - username: VARCHAR(255) NULL
/// - language_code: VARCHAR(16) NULL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatBotUser {
    /// Telegram user id (primary key)
    pub id: i64,

    /// Always true for accounts returned by `getMe`
    pub is_bot: bool,

    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,

    /// IETF language tag of the account
    pub language_code: Option<String>,
}

impl ChatBotUser {
    /// Create a user with only the required fields set.
    pub fn new(id: i64, is_bot: bool, first_name: impl Into<String>) -> Self {
        Self {
            id,
            is_bot,
            first_name: first_name.into(),
            last_name: None,
            username: None,
            language_code: None,
        }
    }
}

/// Repository trait for chat bot user data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatBotUserRepository: Send + Sync {
    /// Insert the user, or overwrite the mutable fields of an existing row
    /// with the same id. Last write wins.
    async fn upsert(&self, user: &ChatBotUser) -> Result<ChatBotUser, AppError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<ChatBotUser>, AppError>;

    /// List every stored user ordered by id.
    async fn find_all(&self) -> Result<Vec<ChatBotUser>, AppError>;

    /// Update the mutable fields of an existing user.
    async fn update(&self, user: &ChatBotUser) -> Result<ChatBotUser, AppError>;

    /// Delete a user by id. Returns whether a row was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Delete every stored user.
    async fn delete_all(&self) -> Result<(), AppError>;

    /// Count stored users.
    async fn count(&self) -> Result<i64, AppError>;
}
