//! # Domain Entities
//!
//! Core domain entities. Persisted entities map directly to their tables.
//!
//! - **ChatBotUser**: The bot's own Telegram identity (`chat_bot_users`)
//! - **ModerationRequest / ModerationResult**: Moderated content and its
//!   decision (`moderation_results`)

mod chat_bot_user;
mod moderation;

// Re-export ChatBotUser entity and related types
pub use chat_bot_user::{ChatBotUser, ChatBotUserRepository};

#[cfg(test)]
pub use chat_bot_user::MockChatBotUserRepository;

// Re-export moderation entities
pub use moderation::{ModerationDecision, ModerationRequest, ModerationResult, UnknownDecision};
