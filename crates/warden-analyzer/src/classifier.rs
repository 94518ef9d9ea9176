//! # Threshold Classifier
//!
//! Turns an entropy score into a binary [`Verdict`] by comparing it against a
//! configurable threshold.
//!
//! ## Detection Strategy
//!
//! A single static threshold over a single feature:
//!
//! 1. **Default threshold: 4.5 bits/char** - Above the entropy of templated
//!    subdomains, below the entropy of base32/base64 payload labels.
//! 2. **Strict inequality** - A score exactly equal to the threshold is
//!    Benign; only scores strictly above it are flagged.
//!
//! ## Limitations
//!
//! The static threshold is a blunt heuristic, kept deliberately:
//!
//! - **Short strings**: a handful of distinct characters can score high by
//!   chance and trigger false positives.
//! - **Low-entropy tunnels**: a covert channel that restricts its alphabet
//!   (or pads with repeats) slides under the threshold.
//! - **Encoded-but-legitimate names**: CDN hashes, DGA-looking but benign
//!   infrastructure labels, and IDN punycode can all trip it.
//!
//! A verdict is a flag for review, not a certainty.

use crate::entropy::shannon_entropy;
use crate::models::Verdict;

/// Default entropy threshold in bits per character.
///
/// - Human-chosen and templated names: ~2.0-4.0 bits/char
/// - Base32/base64 tunnel labels: ~4.2-6.0 bits/char
///
/// # Tuning Guidance
///
/// - **Lower threshold (4.0)**: More aggressive, higher false positive rate
/// - **Higher threshold (5.0)**: More permissive, misses low-alphabet tunnels
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 4.5;

/// Classify an entropy score against a threshold.
///
/// Stateless and deterministic: the verdict is a pure function of the two
/// arguments, so concurrent callers may use different thresholds without
/// interference.
///
/// # Arguments
///
/// * `score` - Entropy in bits per character, as produced by
///   [`shannon_entropy`]
/// * `threshold` - Decision boundary in bits per character
///
/// # Returns
///
/// [`Verdict::Suspicious`] iff `score > threshold` (strict inequality),
/// [`Verdict::Benign`] otherwise.
///
/// # Example
///
/// ```rust
/// use warden_analyzer::classifier::{classify, DEFAULT_ENTROPY_THRESHOLD};
/// use warden_analyzer::Verdict;
///
/// // Exactly at the boundary is Benign
/// assert_eq!(classify(4.5, DEFAULT_ENTROPY_THRESHOLD), Verdict::Benign);
/// assert_eq!(classify(4.6, DEFAULT_ENTROPY_THRESHOLD), Verdict::Suspicious);
/// ```
#[inline]
pub fn classify(score: f64, threshold: f64) -> Verdict {
    if score > threshold {
        Verdict::Suspicious
    } else {
        Verdict::Benign
    }
}

/// Analyze a query string in one step.
///
/// Computes the entropy score and classifies it, returning both so callers
/// can log the score alongside the verdict.
///
/// # Arguments
///
/// * `query` - The query string to analyze
/// * `threshold` - Decision boundary in bits per character
///
/// # Returns
///
/// A tuple of (verdict, entropy_value).
///
/// # Example
///
/// ```rust
/// use warden_analyzer::classifier::{analyze_query, DEFAULT_ENTROPY_THRESHOLD};
///
/// let (verdict, score) = analyze_query("www.example.com", DEFAULT_ENTROPY_THRESHOLD);
/// assert!(verdict.is_benign());
/// assert!(score > 0.0);
/// ```
pub fn analyze_query(query: &str, threshold: f64) -> (Verdict, f64) {
    let score = shannon_entropy(query);
    (classify(score, threshold), score)
}
