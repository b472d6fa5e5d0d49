//! Port for persisting the bot's identity.

use async_trait::async_trait;

use crate::domain::entities::ChatBotUser;
use crate::domain::error::BaseError;

type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by [`SaveChatBotUser`] adapters.
#[derive(Debug, thiserror::Error)]
pub enum SaveChatBotUserError {
    /// The data store rejected or failed the write.
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        cause: Option<Cause>,
    },

    #[error("{message}")]
    Unexpected {
        message: String,
        #[source]
        cause: Option<Cause>,
    },
}

impl SaveChatBotUserError {
    pub fn persistence<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Persistence {
            message: message.into(),
            cause: Some(Box::new(cause)),
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
}

impl BaseError for SaveChatBotUserError {
    fn kind(&self) -> &'static str {
        match self {
            Self::Persistence { .. } => "PersistenceError",
            Self::Unexpected { .. } => "UnexpectedError",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Persistence { message, .. } | Self::Unexpected { message, .. } => message,
        }
    }

    fn source_error(&self) -> Option<&dyn BaseError> {
        None
    }
}

/// Port for saving the bot's identity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SaveChatBotUser: Send + Sync {
    /// Upsert the user by id and return the saved record.
    async fn save(&self, user: &ChatBotUser) -> Result<ChatBotUser, SaveChatBotUserError>;
}
