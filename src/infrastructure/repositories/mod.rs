//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgChatBotUserRepository** - Bot identity storage (`chat_bot_users`)
//! - **PgModerationRepository** - Moderation outcomes (`moderation_results`)
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgChatBotUserRepository, PgModerationRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let bot_repo = PgChatBotUserRepository::new(pool.clone());
//!     let moderation_repo = PgModerationRepository::new(pool);
//! }
//! ```

pub mod chat_bot_user_repository;
pub mod moderation_repository;

pub use chat_bot_user_repository::PgChatBotUserRepository;
pub use moderation_repository::PgModerationRepository;
