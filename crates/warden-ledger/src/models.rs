//! # Core Data Models for the Suspicious Ledger
//!
//! This module defines the flagged-entry record and the ledger's error type.
//!
//! ## Threat Model
//!
//! The types here help defend against:
//!
//! - **Evidence Loss**: an entry is a self-contained record (query, score,
//!   observation time), so a single row is enough for later review.
//! - **Retroactive Reinterpretation**: the score stored is the score that
//!   triggered the flag; reclassifying under a new threshold never rewrites
//!   history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// A single flagged query, created only for Suspicious verdicts.
///
/// Entries are owned exclusively by the ledger once recorded; readers get
/// deserialized copies, never aliases into the store.
///
/// # Fields
///
/// - `query`: the observed query string, verbatim
/// - `score`: the entropy score (bits/char) that exceeded the threshold
/// - `observed_at`: UTC wall-clock time at flag time
///
/// # Example
///
/// ```rust
/// use warden_ledger::SuspiciousEntry;
///
/// let entry = SuspiciousEntry::new("aGVsbG8.tunnel.example.com", 4.9);
/// assert_eq!(entry.query, "aGVsbG8.tunnel.example.com");
/// assert!(entry.score > 4.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspiciousEntry {
    /// The query string that was flagged.
    pub query: String,

    /// Entropy score in bits per character at flag time.
    pub score: f64,

    /// When the query was observed.
    pub observed_at: DateTime<Utc>,
}

impl SuspiciousEntry {
    /// Creates a new entry stamped with the current UTC time.
    ///
    /// # Arguments
    ///
    /// * `query` - The flagged query string
    /// * `score` - The entropy score that triggered the flag
    pub fn new(query: impl Into<String>, score: f64) -> Self {
        Self {
            query: query.into(),
            score,
            observed_at: Utc::now(),
        }
    }
}

/// Errors that can occur during ledger reads and writes.
///
/// Ledger failures are reported to the immediate caller and are never fatal:
/// the interceptor's decision does not depend on a successful write.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The underlying database failed.
    #[error("ledger database error: {0}")]
    Database(#[from] sled::Error),

    /// An entry could not be serialized or deserialized.
    #[error("ledger serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored key or value did not have the expected shape.
    ///
    /// Indicates on-disk corruption or an incompatible ledger file.
    #[error("corrupt ledger entry: {0}")]
    Corrupt(String),
}
