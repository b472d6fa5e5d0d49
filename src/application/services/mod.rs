//! Application Services
//!
//! Use cases that coordinate domain ports.
//!
//! ## Available Services
//!
//! - **GetBotInfoService**: Fetch the bot's identity from Telegram and persist it
//! - **ModerateContentService**: Classify content and record the decision

pub mod get_bot_info;
pub mod moderation_service;

// Re-export bot info use case types
pub use get_bot_info::{GetBotInfoService, GetBotInfoUseCase, GetBotInfoUseCaseError};

// Re-export moderation use case types
pub use moderation_service::{ModerateContentService, ModerateContentUseCase, ModerationError};
