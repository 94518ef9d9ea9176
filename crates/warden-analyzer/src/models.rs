//! # Core Types for the Entropy Analyzer
//!
//! This module defines the classification verdict shared by every consumer of
//! the analyzer: the interceptor on the hot path, the remote oracle client,
//! and any reporting surface.
//!
//! ## Design Principles
//!
//! 1. **Binary, not graded** - A verdict is a heuristic flag for further
//!    review, not a certainty; no confidence score is attached because the
//!    single-feature classifier cannot calibrate one.
//! 2. **Serializable** - Verdicts derive Serde traits so they can travel in
//!    audit logs, ledger dumps, and oracle responses.

use serde::{Deserialize, Serialize};

/// The binary outcome of classifying a query's entropy score.
///
/// A `Suspicious` verdict means the character-distribution entropy exceeded
/// the configured threshold at classification time, a statistical signal
/// worth recording, not proof of tunneling.
///
/// # Example
///
/// ```rust
/// use warden_analyzer::{classifier, Verdict};
///
/// let verdict = classifier::classify(5.2, 4.5);
/// assert_eq!(verdict, Verdict::Suspicious);
/// assert!(verdict.is_suspicious());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Entropy at or below the threshold. Nothing is recorded.
    Benign,

    /// Entropy strictly above the threshold. The query should be recorded
    /// for review.
    Suspicious,
}

impl Verdict {
    /// Returns true if this is a Benign verdict.
    #[inline]
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::Benign)
    }

    /// Returns true if this is a Suspicious verdict.
    #[inline]
    pub fn is_suspicious(&self) -> bool {
        matches!(self, Self::Suspicious)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Benign => write!(f, "benign"),
            Self::Suspicious => write!(f, "suspicious"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_helpers() {
        assert!(Verdict::Benign.is_benign());
        assert!(!Verdict::Benign.is_suspicious());
        assert!(Verdict::Suspicious.is_suspicious());
        assert!(!Verdict::Suspicious.is_benign());
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Benign.to_string(), "benign");
        assert_eq!(Verdict::Suspicious.to_string(), "suspicious");
    }
}
