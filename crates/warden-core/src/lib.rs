//! # Tunnel Warden Core
//!
//! Unified interception facade for entropy-based DNS tunnel detection.
//! Orchestrates the Entropy Analyzer and the Suspicious Ledger behind a
//! single synchronous hook.
//!
//! ## Threat Coverage
//!
//! | Layer | Component | Threats Caught |
//! |-------|-----------|----------------|
//! | Statistics | Entropy Analyzer | Encoded payload labels, covert channels |
//! | Evidence | Suspicious Ledger | Lost flags, torn records, restart amnesia |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     TUNNEL WARDEN CORE                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │   dispatch runtime ──▶ ┌──────────────────┐                     │
//! │      (per query)       │ QueryInterceptor │ ← Synchronous hook  │
//! │                        └────────┬─────────┘                     │
//! │                                 │                               │
//! │              ┌──────────────────┼──────────────────┐            │
//! │              ▼                  ▼                  ▼            │
//! │       ┌─────────────┐    ┌─────────────┐    ┌─────────────┐     │
//! │       │   Entropy   │    │  Threshold  │    │ Suspicious  │     │
//! │       │  Estimator  │    │ Classifier  │    │   Ledger    │     │
//! │       └─────────────┘    └─────────────┘    └─────────────┘     │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The remote oracle client lives in its own crate and is composed by outer
//! surfaces only; nothing here depends on it, so a slow or dead oracle
//! cannot touch the hot path.
//!
//! ## Usage
//!
//! ```rust
//! use warden_core::{InterceptDecision, QueryInterceptor, WardenConfig};
//! use warden_ledger::Ledger;
//!
//! let ledger = Ledger::temporary().unwrap();
//! let interceptor = QueryInterceptor::new(WardenConfig::default(), ledger);
//!
//! match interceptor.on_query("aGVsbG8gd29ybGQ.tunnel.example.com").decision {
//!     InterceptDecision::Allow => { /* proceed */ }
//!     InterceptDecision::Flag => { /* proceed, entry recorded */ }
//!     InterceptDecision::Block => { /* stop the request */ }
//! }
//! ```
//!
//! ## Security Notes
//!
//! - The decision path is synchronous and never blocks on storage latency
//! - Flagging is advisory: blocking is a separate, explicitly chosen policy
//! - Ledger failures ride along in the outcome; they never displace the
//!   decision and are never thrown across the hook boundary

mod config;
mod decision;
mod error;
mod interceptor;

pub use config::{LedgerConfig, OracleConfig, WardenConfig};
pub use decision::{InterceptDecision, InterceptOutcome};
pub use error::WardenError;
pub use interceptor::QueryInterceptor;

// Re-export component types for convenience
pub use warden_analyzer::{classify, shannon_entropy, Verdict, DEFAULT_ENTROPY_THRESHOLD};
pub use warden_ledger::{Ledger, LedgerError, SuspiciousEntry};

/// Core result type for warden operations.
pub type Result<T> = std::result::Result<T, WardenError>;
