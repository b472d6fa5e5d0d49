//! # Admin Telegram Bot Library
//!
//! This crate provides two small administrative services behind one HTTP API:
//! - Telegram bot-info retrieval (`getMe`) persisted to PostgreSQL
//! - Rule-based content moderation with persisted decisions
//!
//! ## Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - **Domain Layer**: Entities, the chained error taxonomy, and port traits
//! - **Application Layer**: Use cases orchestrating the ports, and DTOs
//! - **Infrastructure Layer**: Telegram client, PostgreSQL repositories, metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! admin_telegram_bot/
//! +-- config/         Configuration management
//! +-- domain/         Entities, errors, and ports
//! +-- application/    Use cases and DTOs
//! +-- infrastructure/ Telegram client, database, and adapters
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
