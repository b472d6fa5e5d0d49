//! Moderation Service
//!
//! Classifies submitted content and records the outcome.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::ContentRepository;
use crate::domain::services::ModerationPolicy;
use crate::domain::{ModerationRequest, ModerationResult};
use crate::shared::error::AppError;

/// Moderation service errors
#[derive(Debug, thiserror::Error)]
pub enum ModerationError {
    #[error("Failed to store moderation result: {0}")]
    Persistence(#[source] AppError),

    #[error("Moderation result not found")]
    NotFound,
}

/// Moderate content use case trait
#[async_trait]
pub trait ModerateContentUseCase: Send + Sync {
    /// Decide on the request and store the decision.
    async fn moderate(&self, request: ModerationRequest) -> Result<ModerationResult, ModerationError>;

    /// Fetch a previously stored decision.
    async fn get_result(&self, request_id: &str) -> Result<ModerationResult, ModerationError>;
}

/// ModerateContentUseCase implementation
pub struct ModerateContentService<R>
where
    R: ContentRepository,
{
    repository: Arc<R>,
}

impl<R> ModerateContentService<R>
where
    R: ContentRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ModerateContentUseCase for ModerateContentService<R>
where
    R: ContentRepository + 'static,
{
    async fn moderate(&self, request: ModerationRequest) -> Result<ModerationResult, ModerationError> {
        let verdict = ModerationPolicy::evaluate(&request.content);

        let result = ModerationResult {
            request_id: request.id,
            decision: verdict.decision,
            reason: verdict.reason.map(str::to_string),
        };

        tracing::info!(
            request_id = %result.request_id,
            author_id = ?request.author_id,
            decision = %result.decision,
            "Content moderated"
        );

        self.repository
            .save_result(&result)
            .await
            .map_err(ModerationError::Persistence)?;

        Ok(result)
    }

    async fn get_result(&self, request_id: &str) -> Result<ModerationResult, ModerationError> {
        self.repository
            .find_result(request_id)
            .await
            .map_err(ModerationError::Persistence)?
            .ok_or(ModerationError::NotFound)
    }
}
