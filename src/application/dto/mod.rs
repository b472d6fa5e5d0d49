//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{ModerationRequestDto, UpdateChatBotUserRequest};
pub use response::{ChatBotUserCountResponse, ChatBotUserResponse, ModerationResponseDto};
