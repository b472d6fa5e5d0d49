//! REST API endpoint tests

mod bot_users_tests;
mod moderation_tests;
mod repository_tests;
