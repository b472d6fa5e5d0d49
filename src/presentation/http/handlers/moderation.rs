//! Moderation Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::application::dto::{ModerationRequestDto, ModerationResponseDto};
use crate::application::services::ModerationError;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::startup::AppState;

impl From<ModerationError> for AppError {
    fn from(error: ModerationError) -> Self {
        match error {
            ModerationError::NotFound => AppError::NotFound("Moderation result not found".into()),
            ModerationError::Persistence(e) => e,
        }
    }
}

/// Moderate a piece of content
pub async fn moderate(
    State(state): State<AppState>,
    Json(body): Json<ModerationRequestDto>,
) -> Result<Json<ModerationResponseDto>, AppError> {
    // Validate request
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let result = state.moderate_content.moderate(body.into()).await?;
    metrics::record_moderation_decision(result.decision.as_str());

    Ok(Json(ModerationResponseDto::from(result)))
}

/// Get the stored decision for a request
pub async fn get_moderation_result(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> Result<Json<ModerationResponseDto>, AppError> {
    let result = state.moderate_content.get_result(&request_id).await?;

    Ok(Json(ModerationResponseDto::from(result)))
}
