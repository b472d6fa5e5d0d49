//! Reqwest-backed Telegram Bot API client.
//!
//! This adapter owns transport details only: issuing the `getMe` call, mapping
//! HTTP status codes and envelope error codes onto [`GetChatBotError`], and
//! decoding the JSON body into the domain user. One attempt per call, no
//! retry, transport default timeouts.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::dto::{TelegramResponse, TelegramUser};
use crate::config::TelegramSettings;
use crate::domain::ports::{GetChatBot, GetChatBotError};
use crate::domain::ChatBotUser;

const ENVELOPE_NOT_FOUND_CODE: i32 = 404;

/// Non-success status that the client does not classify further.
#[derive(Debug, thiserror::Error)]
#[error("Telegram API responded with {0}")]
pub struct UnexpectedStatus(pub StatusCode);

/// Telegram Bot API client implementing the [`GetChatBot`] port.
pub struct TelegramBotClient {
    client: Client,
    get_me_url: String,
}

impl TelegramBotClient {
    /// Build a client with a default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(settings: &TelegramSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, settings))
    }

    /// Build a client around an existing reqwest transport.
    pub fn with_client(client: Client, settings: &TelegramSettings) -> Self {
        Self {
            client,
            get_me_url: settings.get_me_url(),
        }
    }

    async fn get_me(&self) -> Result<TelegramResponse<TelegramUser>, GetChatBotError> {
        let response = self
            .client
            .get(&self.get_me_url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GetChatBotError::not_found(format!(
                "Chat bot not found: {}",
                status
            )));
        }
        if status.is_client_error() {
            return Err(GetChatBotError::technical(
                format!("HTTP error: {}", status),
                Some(i32::from(status.as_u16())),
            ));
        }
        if !status.is_success() {
            return Err(unexpected(UnexpectedStatus(status)));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        serde_json::from_slice(&body).map_err(unexpected)
    }
}

#[async_trait]
impl GetChatBot for TelegramBotClient {
    async fn get_chat_bot(&self) -> Result<ChatBotUser, GetChatBotError> {
        tracing::debug!("Calling Telegram getMe");

        let result = self.get_me().await.and_then(into_chat_bot_user);
        match &result {
            Ok(user) => tracing::debug!(bot_id = user.id, "Telegram getMe succeeded"),
            Err(e) => tracing::warn!(error = %e, "Telegram getMe failed"),
        }
        result
    }
}

/// Map a decoded envelope to the domain user or a typed failure.
pub(crate) fn into_chat_bot_user(
    response: TelegramResponse<TelegramUser>,
) -> Result<ChatBotUser, GetChatBotError> {
    if response.ok {
        if let Some(user) = response.result {
            return Ok(user.into());
        }
    }

    match response.error_code {
        Some(ENVELOPE_NOT_FOUND_CODE) => Err(GetChatBotError::not_found(
            response
                .description
                .unwrap_or_else(|| "Chat bot not found".to_string()),
        )),
        Some(code) => Err(GetChatBotError::technical(
            response
                .description
                .unwrap_or_else(|| "Technical error occurred".to_string()),
            Some(code),
        )),
        None => Err(GetChatBotError::technical(
            response
                .description
                .unwrap_or_else(|| "Unknown technical error".to_string()),
            None,
        )),
    }
}

// reqwest includes the request URL in its messages; the URL carries the token.
fn map_transport_error(error: reqwest::Error) -> GetChatBotError {
    unexpected(error.without_url())
}

fn unexpected<E>(cause: E) -> GetChatBotError
where
    E: std::error::Error + Send + Sync + 'static,
{
    GetChatBotError::unexpected(
        format!("Unexpected error calling Telegram API: {}", cause),
        cause,
    )
}
