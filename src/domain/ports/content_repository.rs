//! Port for storing moderation outcomes.

use async_trait::async_trait;

use crate::domain::entities::ModerationResult;
use crate::shared::error::AppError;

/// Port for moderation result storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Store the result, replacing any earlier result for the same request id.
    async fn save_result(&self, result: &ModerationResult) -> Result<(), AppError>;

    /// Look up the stored result for a request.
    async fn find_result(&self, request_id: &str) -> Result<Option<ModerationResult>, AppError>;
}
