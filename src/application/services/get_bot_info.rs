//! Get Bot Info Use Case
//!
//! Fetches the bot's identity from Telegram and persists it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::BaseError;
use crate::domain::ports::{GetChatBot, GetChatBotError, SaveChatBotUser};
use crate::domain::ChatBotUser;

pub const CHAT_BOT_DOES_NOT_EXIST_MESSAGE: &str = "Chat bot does not exist";
pub const UNEXPECTED_RETRIEVAL_MESSAGE: &str = "Unexpected error retrieving bot info";

/// Use case errors. The port error that caused the failure is always kept
/// as `source_error`, so the collapsed label does not lose the original kind.
#[derive(Debug, thiserror::Error)]
pub enum GetBotInfoUseCaseError {
    #[error("{message}")]
    ChatBotDoesNotExist {
        message: String,
        source_error: Box<dyn BaseError>,
    },

    #[error("{message}")]
    UnexpectedUseCase {
        message: String,
        source_error: Box<dyn BaseError>,
    },
}

impl BaseError for GetBotInfoUseCaseError {
    fn kind(&self) -> &'static str {
        match self {
            Self::ChatBotDoesNotExist { .. } => "ChatBotDoesNotExistError",
            Self::UnexpectedUseCase { .. } => "UnexpectedUseCaseError",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::ChatBotDoesNotExist { message, .. } | Self::UnexpectedUseCase { message, .. } => {
                message
            }
        }
    }

    fn source_error(&self) -> Option<&dyn BaseError> {
        match self {
            Self::ChatBotDoesNotExist { source_error, .. }
            | Self::UnexpectedUseCase { source_error, .. } => Some(source_error.as_ref()),
        }
    }
}

impl From<GetChatBotError> for GetBotInfoUseCaseError {
    fn from(error: GetChatBotError) -> Self {
        match error {
            GetChatBotError::ChatBotNotFound { .. } => Self::ChatBotDoesNotExist {
                message: CHAT_BOT_DOES_NOT_EXIST_MESSAGE.to_string(),
                source_error: Box::new(error),
            },
            GetChatBotError::Technical { .. } | GetChatBotError::Unexpected { .. } => {
                Self::UnexpectedUseCase {
                    message: UNEXPECTED_RETRIEVAL_MESSAGE.to_string(),
                    source_error: Box::new(error),
                }
            }
        }
    }
}

/// Get bot info use case trait
#[async_trait]
pub trait GetBotInfoUseCase: Send + Sync {
    /// Fetch the bot's identity and persist it.
    async fn execute(&self) -> Result<ChatBotUser, GetBotInfoUseCaseError>;
}

/// GetBotInfoUseCase implementation
pub struct GetBotInfoService<G, S>
where
    G: GetChatBot,
    S: SaveChatBotUser,
{
    get_chat_bot: Arc<G>,
    save_chat_bot_user: Arc<S>,
}

impl<G, S> GetBotInfoService<G, S>
where
    G: GetChatBot,
    S: SaveChatBotUser,
{
    pub fn new(get_chat_bot: Arc<G>, save_chat_bot_user: Arc<S>) -> Self {
        Self {
            get_chat_bot,
            save_chat_bot_user,
        }
    }
}

#[async_trait]
impl<G, S> GetBotInfoUseCase for GetBotInfoService<G, S>
where
    G: GetChatBot + 'static,
    S: SaveChatBotUser + 'static,
{
    async fn execute(&self) -> Result<ChatBotUser, GetBotInfoUseCaseError> {
        let user = self
            .get_chat_bot
            .get_chat_bot()
            .await
            .map_err(GetBotInfoUseCaseError::from)?;

        tracing::debug!(bot_id = user.id, "Fetched bot info, saving");

        let saved = self
            .save_chat_bot_user
            .save(&user)
            .await
            .map_err(|e| GetBotInfoUseCaseError::UnexpectedUseCase {
                message: format!("Failed to save bot info to database: {}", e.message()),
                source_error: Box::new(e),
            })?;

        Ok(saved)
    }
}
