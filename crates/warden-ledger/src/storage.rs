//! # Append-Only Ledger Storage
//!
//! This module provides the flagged-query store using Sled, an embedded
//! database. Writes land in Sled's in-memory page cache and flush to disk
//! asynchronously, which keeps `record` off the blocking path of the
//! interceptor that calls it.
//!
//! ## Threat Model
//!
//! The storage layer defends against:
//!
//! - **Lost Flags**: sequence keys are handed out atomically, so concurrent
//!   writers cannot overwrite each other's entries.
//! - **Torn Reads**: Sled inserts are atomic per key; a reader never observes
//!   a partially written entry.
//! - **Evidence Loss on Restart**: when opened on a path, flagged entries
//!   survive the process and the sequence resumes after the highest stored
//!   key.
//!
//! ## Storage Structure
//!
//! | Tree | Key | Value | Purpose |
//! |------|-----|-------|---------|
//! | `flagged` | big-endian u64 sequence | serialized `SuspiciousEntry` | append-only flag log |
//!
//! Big-endian sequence keys sort lexicographically in insertion order, so a
//! plain tree iteration IS the insertion-ordered snapshot.

use crate::models::{LedgerError, Result, SuspiciousEntry};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Tree name for the flag log.
const ENTRY_TREE: &str = "flagged";

/// The suspicious-query ledger.
///
/// An append-only log of flagged queries. The ledger exclusively owns its
/// stored entries; [`list_all`](Self::list_all) returns deserialized copies.
///
/// # Thread Safety
///
/// The handle is cheap to clone and safe to share: Sled trees are internally
/// synchronized, and the next sequence number is an atomic counter, so
/// concurrent [`record`](Self::record) calls from multiple interceptor
/// invocations neither lose entries nor corrupt state.
///
/// # Example
///
/// ```rust
/// use warden_ledger::{Ledger, SuspiciousEntry};
///
/// let ledger = Ledger::temporary().unwrap();
/// ledger.record(&SuspiciousEntry::new("x9k2.example.com", 5.1)).unwrap();
///
/// let entries = ledger.list_all().unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].query, "x9k2.example.com");
/// ```
#[derive(Clone)]
pub struct Ledger {
    /// The underlying Sled database.
    db: sled::Db,

    /// Tree holding the flag log.
    entries: sled::Tree,

    /// Next sequence number to assign.
    next_seq: Arc<AtomicU64>,
}

impl Ledger {
    /// Opens or creates a ledger database at the given path.
    ///
    /// Existing entries are kept and the sequence counter resumes after the
    /// highest stored key.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the database directory
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Database` if the path is invalid, permissions
    /// are insufficient, or the database is corrupted, and
    /// `LedgerError::Corrupt` if an existing key is not a sequence key.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = sled::open(path)?;
        Self::from_db(db)
    }

    /// Creates a temporary in-memory ledger.
    ///
    /// The ledger exists only in memory and is lost when the last handle is
    /// dropped. Used by tests and by ephemeral runs that only want the
    /// in-process flag log.
    pub fn temporary() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db)
    }

    fn from_db(db: sled::Db) -> Result<Self> {
        let entries = db.open_tree(ENTRY_TREE)?;

        // Resume numbering after the highest existing key
        let next = match entries.last()? {
            Some((key, _)) => decode_seq(&key)? + 1,
            None => 0,
        };

        Ok(Self {
            db,
            entries,
            next_seq: Arc::new(AtomicU64::new(next)),
        })
    }

    /// Appends a flagged entry to the ledger.
    ///
    /// Each call claims a fresh sequence number atomically, so concurrent
    /// writers cannot collide. The write itself is a single-key insert.
    ///
    /// # Arguments
    ///
    /// * `entry` - The flagged entry to record
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Serialization` if the entry cannot be encoded,
    /// `LedgerError::Database` if the insert fails.
    pub fn record(&self, entry: &SuspiciousEntry) -> Result<()> {
        let value = serde_json::to_vec(entry)?;
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.entries.insert(seq.to_be_bytes(), value)?;
        Ok(())
    }

    /// Returns a snapshot of all flagged entries in insertion order.
    ///
    /// The snapshot reflects the ledger at call time; entries recorded while
    /// the returned vector is in use are not included.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Database` if iteration fails and
    /// `LedgerError::Serialization` if a stored value cannot be decoded.
    pub fn list_all(&self) -> Result<Vec<SuspiciousEntry>> {
        let mut out = Vec::with_capacity(self.entries.len());

        for item in self.entries.iter() {
            let (_, value) = item?;
            out.push(serde_json::from_slice(&value)?);
        }

        Ok(out)
    }

    /// Returns the number of flagged entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been flagged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flushes all pending writes to disk.
    ///
    /// Sled flushes asynchronously by default; call this before shutdown if
    /// durability of the last writes matters.
    ///
    /// # Returns
    ///
    /// The number of bytes flushed.
    pub fn flush(&self) -> Result<usize> {
        Ok(self.db.flush()?)
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("entry_count", &self.len())
            .finish()
    }
}

fn decode_seq(key: &[u8]) -> Result<u64> {
    let bytes: [u8; 8] = key
        .try_into()
        .map_err(|_| LedgerError::Corrupt("sequence key is not 8 bytes".to_string()))?;
    Ok(u64::from_be_bytes(bytes))
}
