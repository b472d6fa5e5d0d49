//! Moderation request and result entities.
//!
//! Results map to the `moderation_results` table.

use std::fmt;
use std::str::FromStr;

/// Content submitted for moderation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationRequest {
    /// Caller-supplied request id; also the key of the stored result
    pub id: String,
    pub content: String,
    pub author_id: Option<String>,
}

/// Outcome of moderating one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModerationDecision {
    Approve,
    Reject,
    Hold,
}

impl ModerationDecision {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "APPROVE",
            Self::Reject => "REJECT",
            Self::Hold => "HOLD",
        }
    }
}

impl fmt::Display for ModerationDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown moderation decision: {0}")]
pub struct UnknownDecision(pub String);

impl FromStr for ModerationDecision {
    type Err = UnknownDecision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "APPROVE" => Ok(Self::Approve),
            "REJECT" => Ok(Self::Reject),
            "HOLD" => Ok(Self::Hold),
            _ => Err(UnknownDecision(s.to_string())),
        }
    }
}

/// Stored moderation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationResult {
    pub request_id: String,
    pub decision: ModerationDecision,
    pub reason: Option<String>,
}
