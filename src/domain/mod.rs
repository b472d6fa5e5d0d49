//! # Domain Layer
//!
//! The domain layer contains the core business logic of the service.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (ChatBotUser, ModerationResult, etc.)
//! - **error**: Chained error trait shared by ports and use cases
//! - **ports**: Contracts implemented by outbound adapters
//! - **services**: Domain services for business rules
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository and port traits define data access contracts
//! - Entities are plain values

pub mod entities;
pub mod error;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use error::BaseError;
