//! Outbound adapter saving chat bot users through the repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{SaveChatBotUser, SaveChatBotUserError};
use crate::domain::{ChatBotUser, ChatBotUserRepository};
use crate::shared::error::AppError;

/// [`SaveChatBotUser`] implementation backed by a [`ChatBotUserRepository`].
pub struct SaveChatBotUserAdapter<R>
where
    R: ChatBotUserRepository,
{
    repository: Arc<R>,
}

impl<R> SaveChatBotUserAdapter<R>
where
    R: ChatBotUserRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SaveChatBotUser for SaveChatBotUserAdapter<R>
where
    R: ChatBotUserRepository + 'static,
{
    async fn save(&self, user: &ChatBotUser) -> Result<ChatBotUser, SaveChatBotUserError> {
        self.repository.upsert(user).await.map_err(|e| {
            tracing::error!(bot_id = user.id, error = %e, "Failed to save chat bot user");
            let message = format!("Failed to save chat bot user: {}", e);
            match e {
                AppError::Database(_) => SaveChatBotUserError::persistence(message, e),
                other => SaveChatBotUserError::unexpected(message, other),
            }
        })
    }
}
