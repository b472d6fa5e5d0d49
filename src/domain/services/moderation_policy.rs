//! Rule-based content moderation policy.

use crate::domain::entities::ModerationDecision;

/// Content shorter than this many characters is rejected.
pub const MIN_CONTENT_LENGTH: usize = 5;

const BANNED_TERM: &str = "spam";

/// Decision for a piece of content plus a short explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub decision: ModerationDecision,
    pub reason: Option<&'static str>,
}

/// Domain service deciding whether content may be published.
pub struct ModerationPolicy;

impl ModerationPolicy {
    /// Evaluate the rules in order; the first match wins.
    ///
    /// 1. blank content is held for a human
    /// 2. content under [`MIN_CONTENT_LENGTH`] characters is rejected
    /// 3. content mentioning "spam" in any case is rejected
    /// 4. everything else is approved
    pub fn evaluate(content: &str) -> Verdict {
        if content.trim().is_empty() {
            return Verdict {
                decision: ModerationDecision::Hold,
                reason: Some("content is blank"),
            };
        }

        if content.chars().count() < MIN_CONTENT_LENGTH {
            return Verdict {
                decision: ModerationDecision::Reject,
                reason: Some("content is too short"),
            };
        }

        if content.to_lowercase().contains(BANNED_TERM) {
            return Verdict {
                decision: ModerationDecision::Reject,
                reason: Some("content contains spam"),
            };
        }

        Verdict {
            decision: ModerationDecision::Approve,
            reason: None,
        }
    }
}
