//! Telegram Bot Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::{
    ChatBotUserCountResponse, ChatBotUserResponse, UpdateChatBotUserRequest,
};
use crate::application::services::GetBotInfoUseCaseError;
use crate::domain::error::BaseError;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::startup::AppState;

impl From<GetBotInfoUseCaseError> for AppError {
    fn from(error: GetBotInfoUseCaseError) -> Self {
        let (status, code) = match &error {
            GetBotInfoUseCaseError::ChatBotDoesNotExist { .. } => {
                (StatusCode::NOT_FOUND, "CHAT_BOT_DOES_NOT_EXIST")
            }
            GetBotInfoUseCaseError::UnexpectedUseCase { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "UNEXPECTED_USE_CASE_ERROR")
            }
        };

        AppError::UseCase {
            status,
            code,
            message: error.message().to_string(),
            error_trace: error.error_trace(),
        }
    }
}

/// Fetch the bot's identity from Telegram, store it, and return it
pub async fn get_bot_info(
    State(state): State<AppState>,
) -> Result<Json<ChatBotUserResponse>, AppError> {
    match state.get_bot_info.execute().await {
        Ok(user) => {
            metrics::record_bot_info("success");
            Ok(Json(ChatBotUserResponse::from(user)))
        }
        Err(e) => {
            let outcome = match &e {
                GetBotInfoUseCaseError::ChatBotDoesNotExist { .. } => "does_not_exist",
                GetBotInfoUseCaseError::UnexpectedUseCase { .. } => "unexpected",
            };
            metrics::record_bot_info(outcome);
            Err(e.into())
        }
    }
}

/// List every stored bot user
pub async fn list_bot_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatBotUserResponse>>, AppError> {
    let users = state.chat_bot_users.find_all().await?;

    Ok(Json(users.into_iter().map(ChatBotUserResponse::from).collect()))
}

/// Count stored bot users
pub async fn count_bot_users(
    State(state): State<AppState>,
) -> Result<Json<ChatBotUserCountResponse>, AppError> {
    let count = state.chat_bot_users.count().await?;

    Ok(Json(ChatBotUserCountResponse { count }))
}

/// Delete every stored bot user
pub async fn delete_all_bot_users(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.chat_bot_users.delete_all().await?;

    tracing::info!("All chat bot users deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Get a stored bot user by ID
pub async fn get_bot_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ChatBotUserResponse>, AppError> {
    let id = parse_id(&id)?;

    let user = state
        .chat_bot_users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Chat bot user not found".into()))?;

    Ok(Json(ChatBotUserResponse::from(user)))
}

/// Edit the names and language of a stored bot user
pub async fn update_bot_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateChatBotUserRequest>,
) -> Result<Json<ChatBotUserResponse>, AppError> {
    let id = parse_id(&id)?;
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let existing = state
        .chat_bot_users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Chat bot user not found".into()))?;

    let updated = state.chat_bot_users.update(&body.apply_to(existing)).await?;

    tracing::info!(bot_id = id, "Chat bot user updated");
    Ok(Json(ChatBotUserResponse::from(updated)))
}

/// Delete a stored bot user by ID
pub async fn delete_bot_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;

    if !state.chat_bot_users.delete_by_id(id).await? {
        return Err(AppError::NotFound("Chat bot user not found".into()));
    }

    tracing::info!(bot_id = id, "Chat bot user deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid bot user ID".into()))
}
