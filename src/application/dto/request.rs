//! Request DTOs
//!
//! Data structures for API request bodies with validation.

use serde::Deserialize;
use validator::Validate;

use crate::domain::{ChatBotUser, ModerationRequest};

/// Moderation request body
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModerationRequestDto {
    #[validate(length(min = 1, max = 255, message = "Request id must be 1-255 characters"))]
    pub id: String,

    /// May be empty; blank content is held rather than refused
    pub content: String,

    #[validate(length(max = 255, message = "Author id must be at most 255 characters"))]
    pub author_id: Option<String>,
}

impl From<ModerationRequestDto> for ModerationRequest {
    fn from(dto: ModerationRequestDto) -> Self {
        Self {
            id: dto.id,
            content: dto.content,
            author_id: dto.author_id,
        }
    }
}

/// Update stored bot user request. `id` and `is_bot` are not editable.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChatBotUserRequest {
    #[validate(length(min = 1, max = 255, message = "First name must be 1-255 characters"))]
    pub first_name: String,

    #[validate(length(max = 255))]
    pub last_name: Option<String>,

    #[validate(length(max = 255))]
    pub username: Option<String>,

    #[validate(length(max = 16))]
    pub language_code: Option<String>,
}

impl UpdateChatBotUserRequest {
    /// Overwrite the editable fields of `user`.
    pub fn apply_to(self, user: ChatBotUser) -> ChatBotUser {
        ChatBotUser {
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            language_code: self.language_code,
            ..user
        }
    }
}
