//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database repositories (PostgreSQL)
//! - Port adapters
//! - Telegram Bot API client
//! - Prometheus metrics

pub mod adapters;
pub mod database;
pub mod metrics;
pub mod repositories;
pub mod telegram;
