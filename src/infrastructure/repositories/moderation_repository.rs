//! Moderation Repository Implementation
//!
//! PostgreSQL implementation of the ContentRepository port.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::ports::ContentRepository;
use crate::domain::{ModerationDecision, ModerationResult};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct ModerationResultRow {
    request_id: String,
    decision: String,
    reason: Option<String>,
}

impl ModerationResultRow {
    fn into_result(self) -> Result<ModerationResult, AppError> {
        let decision = self
            .decision
            .parse::<ModerationDecision>()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(ModerationResult {
            request_id: self.request_id,
            decision,
            reason: self.reason,
        })
    }
}

/// PostgreSQL moderation result repository.
#[derive(Clone)]
pub struct PgModerationRepository {
    pool: PgPool,
}

impl PgModerationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PgModerationRepository {
    async fn save_result(&self, result: &ModerationResult) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO moderation_results (request_id, decision, reason)
            VALUES ($1, $2, $3)
            ON CONFLICT (request_id) DO UPDATE
            SET decision = EXCLUDED.decision,
                reason = EXCLUDED.reason,
                moderated_at = NOW()
            "#,
        )
        .bind(&result.request_id)
        .bind(result.decision.as_str())
        .bind(&result.reason)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_result(&self, request_id: &str) -> Result<Option<ModerationResult>, AppError> {
        let row = sqlx::query_as::<_, ModerationResultRow>(
            r#"
            SELECT request_id, decision, reason
            FROM moderation_results
            WHERE request_id = $1
            "#,
        )
        .bind(request_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_result()).transpose()
    }
}
