//! # Warden Ledger - Flagged-Query Store
//!
//! The ledger records every query the interceptor flags as suspicious, as a
//! `{query, score, observed_at}` row in an append-only log, and serves
//! insertion-ordered snapshots to reporting surfaces.
//!
//! ## Purpose
//!
//! The ledger is the system's memory: the interceptor's verdict is advisory,
//! so the recorded evidence is what an analyst reviews later. Its contract:
//!
//! - every Suspicious verdict produces exactly one entry;
//! - concurrent writers cannot lose or interleave entries;
//! - readers see copies, never mutable aliases into the store;
//! - the write path never blocks on disk.
//!
//! ## Storage
//!
//! Backed by Sled, an embedded log-structured database. Opened on a path the
//! log survives restarts; opened with [`Ledger::temporary`] it lives and dies
//! with the process.
//!
//! ## Usage
//!
//! ```rust
//! use warden_ledger::{Ledger, SuspiciousEntry};
//!
//! let ledger = Ledger::temporary().unwrap();
//! ledger.record(&SuspiciousEntry::new("aGVsbG8.t.example.com", 4.9)).unwrap();
//!
//! for entry in ledger.list_all().unwrap() {
//!     println!("{} {:.3} {}", entry.observed_at, entry.score, entry.query);
//! }
//! ```

pub mod models;
pub mod storage;

pub use models::{LedgerError, Result, SuspiciousEntry};
pub use storage::Ledger;
