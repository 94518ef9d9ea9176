//! The remote oracle client.
//!
//! A thin HTTP client around the external classification endpoint. The call
//! is best-effort and fully decoupled from the interceptor: it has its own
//! timeout, runs on whatever async task the caller chooses, and its verdict
//! is never merged into the interceptor's decision.

use std::time::Duration;

use tracing::debug;
use warden_analyzer::Verdict;

use crate::models::{verdict_from_result, OracleRequest, OracleResponse, Result};

/// Default request timeout.
///
/// The oracle is the only long-latency operation in the system; the timeout
/// bounds it so a dead endpoint costs the caller a known, finite wait.
pub const DEFAULT_ORACLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Default DNS record type reported alongside the query.
pub const DEFAULT_RECORD_TYPE: &str = "A";

/// Client for the external classification service.
///
/// # Example
///
/// ```rust,no_run
/// use warden_oracle::OracleClient;
///
/// # async fn recheck() {
/// let client = OracleClient::new("http://127.0.0.1:5000/predict").unwrap();
///
/// match client.classify("x9k2.example.com").await {
///     Ok(verdict) => println!("oracle verdict: {}", verdict),
///     Err(e) => eprintln!("unable to determine: {}", e),
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OracleClient {
    /// Underlying HTTP client, carrying the timeout.
    http: reqwest::Client,

    /// Classification endpoint URL.
    endpoint: String,

    /// Record type sent with every request.
    record_type: String,
}

impl OracleClient {
    /// Creates a client with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, DEFAULT_ORACLE_TIMEOUT)
    }

    /// Creates a client with an explicit timeout.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tunnel-warden/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            record_type: DEFAULT_RECORD_TYPE.to_string(),
        })
    }

    /// Sets the DNS record type reported alongside queries.
    #[must_use]
    pub fn with_record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = record_type.into();
        self
    }

    /// The endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Asks the oracle for a second opinion on a single query.
    ///
    /// # Errors
    ///
    /// Any failure (refused connection, timeout, non-success status, or a
    /// response without the expected `result` field) is returned as an
    /// [`OracleError`](crate::OracleError). There is no fallback verdict.
    pub async fn classify(&self, query: &str) -> Result<Verdict> {
        let request = OracleRequest {
            dns_info: query.to_string(),
            dns_type: self.record_type.clone(),
        };

        debug!("consulting oracle at {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: OracleResponse = serde_json::from_str(&body)?;
        let verdict = verdict_from_result(&parsed.result);

        debug!("oracle answered '{}': {}", parsed.result, verdict);
        Ok(verdict)
    }
}
