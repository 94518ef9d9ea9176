//! Wire types and errors for the remote classification endpoint.
//!
//! The endpoint contract is small: a POST carrying the query string and its
//! record type, answered by a JSON object whose `result` field is `"Tunnel"`
//! for a positive classification and anything else otherwise.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use warden_analyzer::Verdict;

/// Result type alias for oracle operations.
pub type Result<T> = std::result::Result<T, OracleError>;

/// Request body sent to the classification endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OracleRequest {
    /// The query string under analysis.
    pub dns_info: String,

    /// The DNS record type associated with the query (e.g. "A", "TXT").
    pub dns_type: String,
}

/// Response body expected from the classification endpoint.
///
/// A response without a `result` field is malformed: it must surface as an
/// error, never be read as a verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleResponse {
    /// The service's classification label.
    pub result: String,
}

/// Interpret the oracle's classification label.
///
/// `"Tunnel"` (exact, case-sensitive) maps to [`Verdict::Suspicious`]; every
/// other label maps to [`Verdict::Benign`].
///
/// # Example
///
/// ```rust
/// use warden_analyzer::Verdict;
/// use warden_oracle::models::verdict_from_result;
///
/// assert_eq!(verdict_from_result("Tunnel"), Verdict::Suspicious);
/// assert_eq!(verdict_from_result("Safe"), Verdict::Benign);
/// ```
pub fn verdict_from_result(result: &str) -> Verdict {
    if result == "Tunnel" {
        Verdict::Suspicious
    } else {
        Verdict::Benign
    }
}

/// Errors that can occur while consulting the oracle.
///
/// Oracle failures are isolated to the oracle's caller: they never reach the
/// interceptor, and they never degrade into a silent Benign verdict; a
/// caller that cannot get a verdict reports "unable to determine".
#[derive(Debug, Error)]
pub enum OracleError {
    /// The request could not be completed: connection refused, timeout,
    /// or a non-success HTTP status.
    #[error("oracle transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered, but not with the expected shape.
    #[error("malformed oracle response: {0}")]
    Malformed(#[from] serde_json::Error),
}
