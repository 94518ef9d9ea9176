//! Configuration types for Tunnel Warden.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use warden_analyzer::DEFAULT_ENTROPY_THRESHOLD;

/// Configuration for the interception facade.
///
/// The threshold is fixed for the lifetime of an interceptor; changing it in
/// a new process does not reclassify entries already in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardenConfig {
    /// Entropy threshold in bits per character. Scores strictly above this
    /// value are flagged.
    pub threshold: f64,

    /// Whether a Suspicious verdict blocks the query instead of flagging it.
    ///
    /// The interceptor is advisory unless this is explicitly enabled.
    pub block_suspicious: bool,

    /// Suspicious Ledger configuration.
    pub ledger: LedgerConfig,

    /// Remote oracle configuration.
    pub oracle: OracleConfig,
}

impl Default for WardenConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_ENTROPY_THRESHOLD,
            block_suspicious: false, // Flag by default, don't block
            ledger: LedgerConfig::default(),
            oracle: OracleConfig::default(),
        }
    }
}

/// Suspicious Ledger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Path to the ledger database directory.
    pub db_path: PathBuf,

    /// Keep the ledger purely in memory instead of opening `db_path`.
    pub in_memory: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("./warden_ledger.db"),
            in_memory: false,
        }
    }
}

/// Remote oracle configuration.
///
/// Consumed by whatever surface composes the oracle client; the interceptor
/// itself never reads these fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Classification endpoint URL.
    pub endpoint: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// DNS record type reported alongside the query.
    pub record_type: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/predict".to_string(),
            timeout_secs: 10,
            record_type: "A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WardenConfig::default();
        assert_eq!(config.threshold, 4.5);
        assert!(!config.block_suspicious);
        assert!(!config.ledger.in_memory);
        assert_eq!(config.oracle.record_type, "A");
        assert_eq!(config.oracle.timeout_secs, 10);
    }

    #[test]
    fn test_config_serialization() {
        let config = WardenConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: WardenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.threshold, config.threshold);
        assert_eq!(parsed.oracle.endpoint, config.oracle.endpoint);
        assert_eq!(parsed.ledger.db_path, config.ledger.db_path);
    }
}
