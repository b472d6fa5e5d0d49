//! # Domain Services
//!
//! Domain services encapsulate business rules that don't naturally belong to
//! a single entity.
//!
//! ## Services
//!
//! - **ModerationPolicy**: Content moderation rules

mod moderation_policy;

pub use moderation_policy::*;
