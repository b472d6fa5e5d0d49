//! Port for retrieving the bot's own identity from the messaging platform.

use async_trait::async_trait;

use crate::domain::entities::ChatBotUser;
use crate::domain::error::BaseError;

type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by [`GetChatBot`] adapters.
#[derive(Debug, thiserror::Error)]
pub enum GetChatBotError {
    /// The platform reports that the bot does not exist.
    #[error("{message}")]
    ChatBotNotFound { message: String },

    /// The platform answered with an error code.
    #[error("{message}")]
    Technical {
        message: String,
        error_code: Option<i32>,
    },

    /// Anything else: transport failure, server error, undecodable body.
    #[error("{message}")]
    Unexpected {
        message: String,
        #[source]
        cause: Option<Cause>,
    },
}

impl GetChatBotError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::ChatBotNotFound {
            message: message.into(),
        }
    }

    pub fn technical(message: impl Into<String>, error_code: Option<i32>) -> Self {
        Self::Technical {
            message: message.into(),
            error_code,
        }
    }

    pub fn unexpected<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Unexpected {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Error code reported by the platform, if any.
    pub fn error_code(&self) -> Option<i32> {
        match self {
            Self::Technical { error_code, .. } => *error_code,
            _ => None,
        }
    }
}

impl BaseError for GetChatBotError {
    fn kind(&self) -> &'static str {
        match self {
            Self::ChatBotNotFound { .. } => "ChatBotNotFoundError",
            Self::Technical { .. } => "TechnicalError",
            Self::Unexpected { .. } => "UnexpectedError",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::ChatBotNotFound { message }
            | Self::Technical { message, .. }
            | Self::Unexpected { message, .. } => message,
        }
    }

    fn source_error(&self) -> Option<&dyn BaseError> {
        None
    }
}

/// Port for fetching the bot's identity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetChatBot: Send + Sync {
    /// Fetch the identity of the bot owning the configured credentials.
    async fn get_chat_bot(&self) -> Result<ChatBotUser, GetChatBotError>;
}
