//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(telegram_routes())
        .merge(moderation_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // Runs after routing so the matched path template is available
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Bot info retrieval and stored bot user administration
fn telegram_routes() -> Router<AppState> {
    Router::new()
        .route("/api/telegram/bot-info", get(handlers::telegram::get_bot_info))
        .route(
            "/api/telegram/bot-users",
            get(handlers::telegram::list_bot_users).delete(handlers::telegram::delete_all_bot_users),
        )
        .route("/api/telegram/bot-users/count", get(handlers::telegram::count_bot_users))
        .route(
            "/api/telegram/bot-users/{id}",
            get(handlers::telegram::get_bot_user)
                .put(handlers::telegram::update_bot_user)
                .delete(handlers::telegram::delete_bot_user),
        )
}

fn moderation_routes() -> Router<AppState> {
    Router::new()
        .route("/api/moderation", post(handlers::moderation::moderate))
        .route(
            "/api/moderation/{request_id}",
            get(handlers::moderation::get_moderation_result),
        )
}
