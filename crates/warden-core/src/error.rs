//! Error types for the Tunnel Warden core.

use thiserror::Error;

/// Core error type for warden operations.
///
/// Only I/O-touching components can fail. The estimator and classifier are
/// total functions and never appear here; remote-oracle failures stay inside
/// the oracle crate and never cross into the interceptor.
#[derive(Debug, Error)]
pub enum WardenError {
    /// Ledger read or write failure.
    #[error("ledger error: {0}")]
    Ledger(#[from] warden_ledger::LedgerError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
