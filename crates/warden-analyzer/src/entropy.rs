//! # Shannon Entropy Estimator
//!
//! This module implements Shannon entropy analysis over the character
//! distribution of an outbound query string. High entropy is the statistical
//! signature of encoded payloads smuggled inside query-like identifiers.
//!
//! ## Threat Model
//!
//! **Target Attack: DNS Tunneling**
//!
//! DNS tunneling tools (iodine, dnscat2, dns2tcp) exfiltrate data or run
//! covert channels by packing payload bytes into query names, typically as
//! base32/base64-encoded labels:
//!
//! ```text
//! aGVsbG8gd29ybGQgdGhpcyBpcyBleGZpbA.tunnel.example.com
//! ```
//!
//! Encoded payloads draw near-uniformly from their alphabet, so their
//! character-distribution entropy sits well above the entropy of names chosen
//! by humans or templated by applications.
//!
//! ## Shannon Entropy Theory
//!
//! For a discrete random variable X with probability mass function P(X),
//! Shannon entropy is:
//!
//! ```text
//! H(X) = -Σ P(xᵢ) log₂ P(xᵢ)
//! ```
//!
//! We treat each code point of the query as a sample and compute the
//! empirical distribution over the observed character set.
//!
//! ### Entropy Benchmarks
//!
//! | Content Type | Typical Entropy (bits/char) |
//! |--------------|----------------------------|
//! | Human-chosen hostnames | 2.0 - 3.3 |
//! | CDN / templated subdomains | 3.0 - 4.0 |
//! | Hex-encoded payload labels | 3.5 - 4.0 |
//! | Base32 tunnel labels | 4.2 - 5.0 |
//! | Base64 / random payloads | 5.0 - 6.0 |
//!
//! The theoretical ceiling for a string of length L over an n-symbol alphabet
//! is `log2(n)`, bounded in practice by `log2(L)`.
//!
//! ## References
//!
//! - **Shannon, C.E. (1948)** - "A Mathematical Theory of Communication"
//!   <https://people.math.harvard.edu/~ctm/home/text/others/shannon/entropy/entropy.pdf>
//!
//! - **Born & Gustafson (2010)** - "Detecting DNS Tunnels Using Character
//!   Frequency Analysis" <https://arxiv.org/abs/1004.4358>
//!
//! - **Farnham, G. (2013)** - "Detecting DNS Tunneling", SANS Institute
//!   Information Security Reading Room.

use std::collections::HashMap;

/// Calculate Shannon entropy of a query string in bits per character.
///
/// Computes the empirical entropy based on the code-point frequency
/// distribution. Uses base-2 logarithm, so entropy is measured in bits.
///
/// This is a total function: every string, including the empty string, is a
/// valid input, and the result is always finite and non-negative. It is pure
/// and deterministic, depending only on the frequency distribution: the
/// result is invariant under permutation of the input and under consistent
/// character renaming.
///
/// # Arguments
///
/// * `query` - The query string to analyze
///
/// # Returns
///
/// Entropy in bits per character:
/// - `0.0` for the empty string (no symbols, no uncertainty)
/// - `0.0` for any single repeated character (p = 1, log2(1) = 0)
/// - `log2(n)` for n distinct characters occurring once each
///
/// # Algorithm
///
/// 1. Count the frequency of each unique code point
/// 2. Convert counts to probabilities: P(c) = count(c) / total
/// 3. Compute: H = -Σ P(c) × log₂(P(c))
///
/// # Example
///
/// ```rust
/// use warden_analyzer::entropy::shannon_entropy;
///
/// assert_eq!(shannon_entropy(""), 0.0);
/// assert_eq!(shannon_entropy("aaaaaaaa"), 0.0);
///
/// // Two symbols with equal frequency carry exactly one bit each
/// let h = shannon_entropy("abababab");
/// assert!((h - 1.0).abs() < 1e-9);
/// ```
pub fn shannon_entropy(query: &str) -> f64 {
    if query.is_empty() {
        return 0.0;
    }

    // Build frequency map over code points
    let mut freq: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;

    for c in query.chars() {
        *freq.entry(c).or_insert(0) += 1;
        total += 1;
    }

    // Shannon entropy: H(X) = -Σ p(x) log₂ p(x)
    let total_f64 = total as f64;
    let mut entropy = 0.0;

    for &count in freq.values() {
        let p = count as f64 / total_f64;
        entropy -= p * p.log2();
    }

    entropy
}
