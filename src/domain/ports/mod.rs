//! # Ports
//!
//! Contracts between the use cases and the outside world. Adapters in the
//! infrastructure layer implement these traits; use cases depend only on them.

mod content_repository;
mod get_chat_bot;
mod save_chat_bot_user;

pub use content_repository::ContentRepository;
pub use get_chat_bot::{GetChatBot, GetChatBotError};
pub use save_chat_bot_user::{SaveChatBotUser, SaveChatBotUserError};

#[cfg(test)]
pub use content_repository::MockContentRepository;
#[cfg(test)]
pub use get_chat_bot::MockGetChatBot;
#[cfg(test)]
pub use save_chat_bot_user::MockSaveChatBotUser;
