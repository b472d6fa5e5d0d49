//! Telegram Bot API wire types.

use serde::Deserialize;

use crate::domain::ChatBotUser;

/// Envelope wrapping every Bot API response.
///
/// Telegram sends snake_case keys; the camelCase aliases accept payloads
/// produced by clients that re-serialize the envelope.
#[derive(Debug, Deserialize)]
pub struct TelegramResponse<T> {
    pub ok: bool,

    pub result: Option<T>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, alias = "errorCode")]
    pub error_code: Option<i32>,
}

/// Telegram `User` object as returned by `getMe`.
#[derive(Debug, Deserialize)]
pub struct TelegramUser {
    pub id: i64,

    #[serde(alias = "isBot")]
    pub is_bot: bool,

    #[serde(alias = "firstName")]
    pub first_name: String,

    #[serde(default, alias = "lastName")]
    pub last_name: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default, alias = "languageCode")]
    pub language_code: Option<String>,

    #[serde(default, alias = "canJoinGroups")]
    pub can_join_groups: Option<bool>,

    #[serde(default, alias = "canReadAllGroupMessages")]
    pub can_read_all_group_messages: Option<bool>,

    #[serde(default, alias = "supportsInlineQueries")]
    pub supports_inline_queries: Option<bool>,
}

impl From<TelegramUser> for ChatBotUser {
    fn from(user: TelegramUser) -> Self {
        Self {
            id: user.id,
            is_bot: user.is_bot,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            language_code: user.language_code,
        }
    }
}
