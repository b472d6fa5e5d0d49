//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    GetBotInfoService, GetBotInfoUseCase, ModerateContentService, ModerateContentUseCase,
};
use crate::config::Settings;
use crate::domain::entities::ChatBotUserRepository;
use crate::infrastructure::adapters::SaveChatBotUserAdapter;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgChatBotUserRepository, PgModerationRepository};
use crate::infrastructure::telegram::TelegramBotClient;
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub get_bot_info: Arc<dyn GetBotInfoUseCase>,
    pub moderate_content: Arc<dyn ModerateContentUseCase>,
    pub chat_bot_users: Arc<dyn ChatBotUserRepository>,
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
            tracing::info!("Database migrations applied");
        }

        let telegram = Arc::new(TelegramBotClient::new(&settings.telegram)?);
        let chat_bot_users = Arc::new(PgChatBotUserRepository::new(db.clone()));
        let save_chat_bot_user = Arc::new(SaveChatBotUserAdapter::new(chat_bot_users.clone()));
        let moderation_results = Arc::new(PgModerationRepository::new(db.clone()));

        let state = AppState {
            db,
            get_bot_info: Arc::new(GetBotInfoService::new(telegram, save_chat_bot_user)),
            moderate_content: Arc::new(ModerateContentService::new(moderation_results)),
            chat_bot_users,
        };

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
