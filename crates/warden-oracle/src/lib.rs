//! # Warden Oracle - Remote Second Opinion
//!
//! A best-effort client for an external classification service, used when a
//! human or UI wants a recheck of a specific query. It is deliberately
//! OUTSIDE the interception path: the interceptor never calls it, never waits
//! on it, and never merges its verdict.
//!
//! ## Wire Contract
//!
//! | Direction | Shape |
//! |-----------|-------|
//! | Request | `POST {"dns_info": "<query>", "dns_type": "A"}` |
//! | Response | `{"result": "Tunnel"}` → Suspicious; any other `result` → Benign |
//!
//! Transport, auth, and the endpoint address are deployment configuration;
//! the default endpoint is `http://127.0.0.1:5000/predict`.
//!
//! ## Failure Semantics
//!
//! A refused connection, timeout, error status, or malformed body is an
//! [`OracleError`], reported to the oracle's caller only. It never crashes
//! the process and never silently degrades to Benign; user-facing surfaces
//! render it as "unable to determine".
//!
//! ## Usage
//!
//! ```rust,no_run
//! use warden_oracle::OracleClient;
//!
//! # async fn recheck() {
//! let client = OracleClient::new("http://127.0.0.1:5000/predict")
//!     .unwrap()
//!     .with_record_type("TXT");
//!
//! match client.classify("aGVsbG8.tunnel.example.com").await {
//!     Ok(verdict) => println!("oracle verdict: {}", verdict),
//!     Err(e) => eprintln!("unable to determine: {}", e),
//! }
//! # }
//! ```

pub mod client;
pub mod models;

pub use client::{OracleClient, DEFAULT_ORACLE_TIMEOUT, DEFAULT_RECORD_TYPE};
pub use models::{verdict_from_result, OracleError, OracleRequest, OracleResponse, Result};
