//! Telegram Bot API
//!
//! Outbound adapter for the `getMe` call.

mod client;
pub mod dto;

pub use client::{TelegramBotClient, UnexpectedStatus};
