//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{ChatBotUser, ModerationResult};

/// Chat bot user response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBotUserResponse {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
}

impl From<ChatBotUser> for ChatBotUserResponse {
    fn from(user: ChatBotUser) -> Self {
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

/// Stored bot user count
#[derive(Debug, Serialize)]
pub struct ChatBotUserCountResponse {
    pub count: i64,
}

/// Moderation result response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationResponseDto {
    pub request_id: String,
    pub decision: String,
    pub reason: Option<String>,
}

impl From<ModerationResult> for ModerationResponseDto {
    fn from(result: ModerationResult) -> Self {
        Self {
            request_id: result.request_id,
            decision: result.decision.as_str().to_string(),
            reason: result.reason,
        }
    }
}
