//! # Admin Telegram Bot
//!
//! Administrative service for a Telegram bot.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - Telegram API client
//! - HTTP server

use anyhow::Result;
use tracing::info;

use admin_telegram_bot::config::Settings;
use admin_telegram_bot::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    admin_telegram_bot::telemetry::init_tracing();

    info!("Starting Admin Telegram Bot...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        telegram_api = %settings.telegram.api_base_url,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
