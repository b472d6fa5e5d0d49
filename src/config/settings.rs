//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// Telegram Bot API settings
    pub telegram: TelegramSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Apply pending migrations on startup
    pub run_migrations: bool,
}

/// Telegram Bot API configuration.
#[derive(Clone, Deserialize)]
pub struct TelegramSettings {
    /// Bot token issued by BotFather
    pub token: String,

    /// Bot API base URL, without trailing slash
    pub api_base_url: String,
}

// The token is a credential; keep it out of logs and panic messages.
impl std::fmt::Debug for TelegramSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramSettings")
            .field("token", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

/// Default Telegram Bot API host.
pub const DEFAULT_TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the Telegram bot token is missing.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            .set_default("telegram.token", "")?
            .set_default("telegram.api_base_url", DEFAULT_TELEGRAM_API_BASE_URL)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            .add_source(app_environment())
            // Map simple environment variables
            .set_override_option(
                "server.host",
                std::env::var("SERVER_HOST").ok(),
            )?
            .set_override_option(
                "server.port",
                std::env::var("SERVER_PORT").ok(),
            )?
            .set_override_option(
                "database.url",
                std::env::var("DATABASE_URL").ok(),
            )?
            .set_override_option(
                "telegram.token",
                std::env::var("TELEGRAM_BOT_TOKEN").ok(),
            )?
            .set_override_option(
                "telegram.api_base_url",
                std::env::var("TELEGRAM_API_BASE_URL").ok(),
            )?
            .build()?
            .try_deserialize()
            .and_then(Self::validate)
    }

    fn validate(mut self) -> Result<Self, ConfigError> {
        if self.telegram.token.trim().is_empty() {
            return Err(ConfigError::Message(
                "Telegram bot token is required (set TELEGRAM_BOT_TOKEN or telegram.token)".into(),
            ));
        }

        self.telegram.api_base_url = self.telegram.api_base_url.trim_end_matches('/').to_string();
        if self.telegram.api_base_url.is_empty() {
            return Err(ConfigError::Message(
                "Telegram API base URL must not be empty".into(),
            ));
        }

        Ok(self)
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// `APP__*` environment source.
///
/// APP__SERVER__PORT=8080 -> server.port = 8080
/// APP__CORS__ALLOWED_ORIGINS=http://a.com,http://b.com -> two origins
fn app_environment() -> Environment {
    Environment::default()
        .prefix("APP")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
}

impl TelegramSettings {
    /// Build the `getMe` endpoint for the configured bot.
    pub fn get_me_url(&self) -> String {
        format!("{}/bot{}/getMe", self.api_base_url, self.token)
    }
}
