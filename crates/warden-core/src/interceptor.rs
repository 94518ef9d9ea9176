//! The query interceptor.
//!
//! This module provides the main entry point for the Tunnel Warden pipeline.
//! The [`QueryInterceptor`] struct is the synchronous hook a dispatch runtime
//! invokes once per outbound query, orchestrating estimator → classifier →
//! ledger.

use crate::{
    config::WardenConfig,
    decision::{InterceptDecision, InterceptOutcome},
    Result,
};

use warden_analyzer::{classify, shannon_entropy};
use warden_ledger::{Ledger, SuspiciousEntry};

use tracing::{debug, info, warn};

/// The synchronous interception hook.
///
/// One interceptor serves a whole process: the host dispatch runtime calls
/// [`on_query`](Self::on_query) through a shared reference, from as many
/// threads as it likes. The entropy estimator and classifier are pure, and
/// the ledger serializes its own writes, so no external locking is needed.
///
/// # Security Model
///
/// The decision pipeline is:
/// 1. Entropy estimation (pure, total)
/// 2. Threshold classification (pure, total)
/// 3. Ledger write, only for Suspicious verdicts
///
/// The pipeline is advisory-first: a Suspicious verdict flags and records the
/// query but lets it proceed unless blocking was explicitly configured. A
/// ledger failure is reported in the outcome and never changes the decision:
/// the decision must be determinable even if persistence fails.
///
/// # Example
///
/// ```rust
/// use warden_core::{QueryInterceptor, WardenConfig};
/// use warden_ledger::Ledger;
///
/// let ledger = Ledger::temporary().unwrap();
/// let interceptor = QueryInterceptor::new(WardenConfig::default(), ledger);
///
/// let outcome = interceptor.on_query("www.example.com");
/// assert!(outcome.is_allowed());
/// ```
pub struct QueryInterceptor {
    /// Configuration, fixed for the interceptor's lifetime.
    config: WardenConfig,

    /// The flagged-query store this interceptor writes to.
    ledger: Ledger,
}

impl QueryInterceptor {
    /// Creates an interceptor around an explicitly owned ledger.
    ///
    /// The ledger's lifecycle belongs to the caller; handing a clone of the
    /// same ledger to a reporting surface is the supported way to read flags
    /// while interception is live.
    pub fn new(config: WardenConfig, ledger: Ledger) -> Self {
        info!(
            "interceptor initialized with threshold {:.2} bits/char ({} mode)",
            config.threshold,
            if config.block_suspicious { "blocking" } else { "advisory" }
        );

        Self { config, ledger }
    }

    /// Creates an interceptor and its ledger from configuration.
    ///
    /// Opens the ledger at `config.ledger.db_path`, or in memory when
    /// `config.ledger.in_memory` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger database cannot be opened.
    pub fn from_config(config: WardenConfig) -> Result<Self> {
        let ledger = if config.ledger.in_memory {
            Ledger::temporary()?
        } else {
            Ledger::open(&config.ledger.db_path)?
        };

        Ok(Self::new(config, ledger))
    }

    /// Inspects one outbound query and returns the decision.
    ///
    /// Invoked synchronously by the host dispatch runtime for every observed
    /// query, before the underlying request proceeds. Exactly one ledger
    /// write happens per Suspicious verdict; zero for Benign.
    ///
    /// Any string is a valid query (empty included) and this method cannot
    /// fail: a ledger write failure is carried in the returned outcome
    /// without altering the decision.
    pub fn on_query(&self, query: &str) -> InterceptOutcome {
        let score = shannon_entropy(query);
        let verdict = classify(score, self.config.threshold);

        debug!("observed query scored {:.3} bits/char: {}", score, verdict);

        if verdict.is_benign() {
            return InterceptOutcome {
                decision: InterceptDecision::Allow,
                verdict,
                score,
                ledger_error: None,
            };
        }

        warn!(
            "suspicious query: {:.3} bits/char exceeds threshold {:.2}",
            score, self.config.threshold
        );

        let entry = SuspiciousEntry::new(query, score);
        let ledger_error = match self.ledger.record(&entry) {
            Ok(()) => None,
            Err(e) => {
                warn!("failed to record flagged query: {}", e);
                Some(e)
            }
        };

        let decision = if self.config.block_suspicious {
            InterceptDecision::Block
        } else {
            InterceptDecision::Flag
        };

        InterceptOutcome {
            decision,
            verdict,
            score,
            ledger_error,
        }
    }

    /// The entropy threshold this interceptor classifies against.
    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// The ledger this interceptor records into.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The full configuration.
    pub fn config(&self) -> &WardenConfig {
        &self.config
    }
}
