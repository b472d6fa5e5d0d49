//! Outbound Adapters
//!
//! Implementations of domain ports on top of repositories.

mod save_chat_bot_user;

pub use save_chat_bot_user::SaveChatBotUserAdapter;
