//! Decision types for query interception results.

use serde::{Deserialize, Serialize};
use warden_analyzer::Verdict;
use warden_ledger::LedgerError;

/// The interceptor's per-query decision.
///
/// The interceptor returns one of three decisions for every observed query:
/// - `Allow`: the query scored at or below the threshold
/// - `Flag`: the query was recorded as suspicious; advisory only
/// - `Block`: the query was recorded and should be stopped; produced only
///   when blocking was explicitly enabled in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterceptDecision {
    /// Query passed the entropy check. Nothing was recorded.
    Allow,

    /// Query was flagged and recorded. The caller may proceed.
    Flag,

    /// Query was flagged and recorded, and blocking is enabled. The caller
    /// should not let the request proceed.
    Block,
}

impl InterceptDecision {
    /// Returns true if this is an Allow decision.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns true if this is a Flag decision.
    pub fn is_flagged(&self) -> bool {
        matches!(self, Self::Flag)
    }

    /// Returns true if this is a Block decision.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Block)
    }
}

impl std::fmt::Display for InterceptDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Flag => write!(f, "flag"),
            Self::Block => write!(f, "block"),
        }
    }
}

/// Everything `on_query` learned about one query.
///
/// The decision is always present, even when the ledger write behind a
/// Suspicious verdict failed: persistence problems ride along in
/// `ledger_error` instead of displacing the decision.
#[derive(Debug)]
pub struct InterceptOutcome {
    /// The decision for this query.
    pub decision: InterceptDecision,

    /// The classifier's verdict.
    pub verdict: Verdict,

    /// The entropy score in bits per character.
    pub score: f64,

    /// The ledger failure, if recording the flagged query did not succeed.
    ///
    /// Always `None` for Allow decisions (nothing is written).
    pub ledger_error: Option<LedgerError>,
}

impl InterceptOutcome {
    /// Returns true if the query was allowed through.
    pub fn is_allowed(&self) -> bool {
        self.decision.is_allowed()
    }

    /// Returns true if the flagged entry reached the ledger (vacuously true
    /// for Allow decisions).
    pub fn persisted(&self) -> bool {
        self.ledger_error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_helpers() {
        assert!(InterceptDecision::Allow.is_allowed());
        assert!(!InterceptDecision::Allow.is_flagged());
        assert!(InterceptDecision::Flag.is_flagged());
        assert!(!InterceptDecision::Flag.is_blocked());
        assert!(InterceptDecision::Block.is_blocked());
        assert!(!InterceptDecision::Block.is_allowed());
    }

    #[test]
    fn test_decision_display() {
        assert_eq!(InterceptDecision::Allow.to_string(), "allow");
        assert_eq!(InterceptDecision::Flag.to_string(), "flag");
        assert_eq!(InterceptDecision::Block.to_string(), "block");
    }

    #[test]
    fn test_outcome_persisted() {
        let outcome = InterceptOutcome {
            decision: InterceptDecision::Flag,
            verdict: Verdict::Suspicious,
            score: 5.0,
            ledger_error: None,
        };
        assert!(outcome.persisted());
        assert!(!outcome.is_allowed());
    }
}
