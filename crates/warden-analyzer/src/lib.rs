//! # Warden Analyzer - Entropy Classification Layer
//!
//! The analyzer is the statistical heart of Tunnel Warden. It turns an
//! outbound query string into an entropy score and a binary verdict, with no
//! I/O, no shared state, and no failure modes.
//!
//! ## Purpose
//!
//! This crate implements two pure functions:
//!
//! 1. **Entropy Estimation** - Shannon entropy of the query's code-point
//!    frequency distribution, in bits per character.
//!
//! 2. **Threshold Classification** - A strict-inequality comparison of the
//!    score against a configurable threshold, producing `Benign` or
//!    `Suspicious`.
//!
//! ## Threat Model
//!
//! | Threat | Signal | Defense |
//! |--------|--------|---------|
//! | DNS tunneling (iodine, dnscat2) | Base32/base64 payload labels | Entropy threshold |
//! | Data exfiltration via query names | Encoded payload chunks | Entropy threshold |
//! | Covert C2 beaconing | Random-looking label churn | Entropy threshold |
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                   WARDEN ANALYZER                    │
//! ├──────────────────────────────────────────────────────┤
//! │                                                      │
//! │   query ──▶ ┌───────────────┐     ┌──────────────┐   │
//! │             │    ENTROPY    │     │  CLASSIFIER  │   │
//! │             │   ESTIMATOR   │ ──▶ │              │   │
//! │             │               │     │ score > τ ?  │   │
//! │             │ H = -Σ p·lg p │     └──────┬───────┘   │
//! │             └───────────────┘            │           │
//! │                                          ▼           │
//! │                                 Benign │ Suspicious  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Both stages are total functions over arbitrary Unicode input (the empty
//! string included), so they are trivially thread-safe and can run on the
//! hot path of a request dispatcher without synchronization.
//!
//! ## Usage
//!
//! ```rust
//! use warden_analyzer::{classifier, entropy, Verdict};
//!
//! let query = "www.example.com";
//! let score = entropy::shannon_entropy(query);
//! match classifier::classify(score, classifier::DEFAULT_ENTROPY_THRESHOLD) {
//!     Verdict::Benign => { /* let it through */ }
//!     Verdict::Suspicious => { /* record it */ }
//! }
//! ```

pub mod classifier;
pub mod entropy;
pub mod models;

pub use classifier::{analyze_query, classify, DEFAULT_ENTROPY_THRESHOLD};
pub use entropy::shannon_entropy;
pub use models::Verdict;
