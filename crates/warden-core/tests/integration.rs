//! # Tunnel Warden Integration Tests
//!
//! End-to-end tests driving the interceptor the way a dispatch runtime would.
//!
//! ## Scenario Coverage
//!
//! | Scenario | Property | Test |
//! |----------|----------|------|
//! | Repeated-char query | zero entropy → Allow, no write | `test_repeated_char_query_allowed` |
//! | Normal hostname | low entropy → Allow, no write | `test_normal_hostname_allowed` |
//! | Encoded tunnel label | high entropy → Flag + one entry | `test_tunnel_label_flagged` |
//! | Boundary score | equal to threshold → Benign | `test_score_equal_to_threshold_allowed` |
//! | Mixed-character query | verdict follows computed score | `test_mixed_query_matches_formula` |
//! | Concurrent interception | N queries → exactly N entries | `test_concurrent_interception_loses_nothing` |
//! | Threshold override | same query, different verdicts | `test_threshold_override` |
//! | Block mode | explicit opt-in policy | `test_block_mode_still_records` |

use warden_core::{QueryInterceptor, WardenConfig};
use warden_ledger::Ledger;

use std::sync::Arc;
use std::thread;

/// Interceptor over a fresh in-memory ledger with default (advisory) config.
fn default_interceptor() -> QueryInterceptor {
    QueryInterceptor::new(WardenConfig::default(), Ledger::temporary().unwrap())
}

/// Interceptor with a custom threshold over a fresh in-memory ledger.
fn interceptor_with_threshold(threshold: f64) -> QueryInterceptor {
    let mut config = WardenConfig::default();
    config.threshold = threshold;
    QueryInterceptor::new(config, Ledger::temporary().unwrap())
}

// =============================================================================
// BENIGN PATH
// =============================================================================

#[test]
fn test_repeated_char_query_allowed() {
    let warden = default_interceptor();

    let outcome = warden.on_query("aaaaaaaa");

    assert!(outcome.is_allowed());
    assert_eq!(outcome.score, 0.0);
    assert!(warden.ledger().is_empty(), "Allow must not write to the ledger");
}

#[test]
fn test_normal_hostname_allowed() {
    let warden = default_interceptor();

    for query in ["www.example.com", "mail.google.com", "cdn.jsdelivr.net"] {
        let outcome = warden.on_query(query);
        assert!(outcome.is_allowed(), "expected Allow for {}", query);
    }

    assert!(warden.ledger().is_empty());
}

#[test]
fn test_empty_query_allowed() {
    let warden = default_interceptor();

    let outcome = warden.on_query("");

    assert!(outcome.is_allowed());
    assert_eq!(outcome.score, 0.0);
    assert!(warden.ledger().is_empty());
}

// =============================================================================
// SUSPICIOUS PATH
// =============================================================================

#[test]
fn test_tunnel_label_flagged() {
    let warden = default_interceptor();
    let query = "aGVsbG8gd29ybGQgdGhpcyBpcyBleGZpbA7x9.tunnel.example.com";

    let outcome = warden.on_query(query);

    assert!(outcome.decision.is_flagged());
    assert!(outcome.persisted());

    let entries = warden.ledger().list_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].query, query);
    assert_eq!(entries[0].score, outcome.score);
}

#[test]
fn test_flagging_is_advisory_by_default() {
    let warden = default_interceptor();
    let query = "aGVsbG8gd29ybGQgdGhpcyBpcyBleGZpbA7x9.tunnel.example.com";

    let outcome = warden.on_query(query);

    // Advisory: flagged, not blocked
    assert!(outcome.decision.is_flagged());
    assert!(!outcome.decision.is_blocked());
}

#[test]
fn test_block_mode_still_records() {
    let mut config = WardenConfig::default();
    config.block_suspicious = true;
    let warden = QueryInterceptor::new(config, Ledger::temporary().unwrap());
    let query = "aGVsbG8gd29ybGQgdGhpcyBpcyBleGZpbA7x9.tunnel.example.com";

    let outcome = warden.on_query(query);

    assert!(outcome.decision.is_blocked());
    assert_eq!(warden.ledger().len(), 1, "blocking still records exactly one entry");
}

// =============================================================================
// THRESHOLD SEMANTICS
// =============================================================================

#[test]
fn test_score_equal_to_threshold_allowed() {
    // "abababab" carries exactly 1.0 bits/char; a threshold of exactly 1.0
    // must NOT flag it (strict inequality at the boundary)
    let warden = interceptor_with_threshold(1.0);

    let outcome = warden.on_query("abababab");

    assert!((outcome.score - 1.0).abs() < 1e-9);
    assert!(outcome.is_allowed());
    assert!(warden.ledger().is_empty());
}

#[test]
fn test_threshold_override() {
    // log2(3) ≈ 1.585 bits/char: suspicious under a 1.0 threshold,
    // benign under the default
    let query = "abcabcabc";

    let strict = interceptor_with_threshold(1.0);
    assert!(strict.on_query(query).decision.is_flagged());
    assert_eq!(strict.ledger().len(), 1);

    let default = default_interceptor();
    assert!(default.on_query(query).is_allowed());
    assert!(default.ledger().is_empty());
}

#[test]
fn test_mixed_query_matches_formula() {
    // Verify against the literally computed value, not an assumed constant
    let query = "x7Qm2!pL9kR$vB3";

    let mut counts = std::collections::HashMap::new();
    for c in query.chars() {
        *counts.entry(c).or_insert(0u32) += 1;
    }
    let len = query.chars().count() as f64;
    let expected: f64 = counts
        .values()
        .map(|&n| {
            let p = n as f64 / len;
            -p * p.log2()
        })
        .sum();

    let warden = default_interceptor();
    let outcome = warden.on_query(query);

    assert!((outcome.score - expected).abs() < 1e-9);
    assert_eq!(
        outcome.verdict.is_suspicious(),
        expected > warden.threshold(),
        "verdict must follow the computed score against the threshold"
    );
}

// =============================================================================
// CONCURRENCY
// =============================================================================

#[test]
fn test_concurrent_interception_loses_nothing() {
    let warden = Arc::new(default_interceptor());
    let n = 32usize;

    // 36 distinct alphanumerics plus a distinct 2-digit suffix: every query
    // scores well above 4.5 bits/char and no two queries are equal
    let alphabet = "abcdefghijklmnopqrstuvwxyz0123456789";
    let queries: Vec<String> = (0..n).map(|i| format!("{}{:02}", alphabet, i)).collect();

    thread::scope(|s| {
        for query in &queries {
            let warden = Arc::clone(&warden);
            s.spawn(move || {
                let outcome = warden.on_query(query);
                assert!(outcome.decision.is_flagged());
                assert!(outcome.persisted());
            });
        }
    });

    assert_eq!(warden.ledger().len(), n, "no entry lost, none duplicated");

    let mut recorded: Vec<String> = warden
        .ledger()
        .list_all()
        .unwrap()
        .into_iter()
        .map(|e| e.query)
        .collect();
    recorded.sort();
    let mut expected = queries.clone();
    expected.sort();
    assert_eq!(recorded, expected);
}

// =============================================================================
// LEDGER LIFECYCLE
// =============================================================================

#[test]
fn test_flags_survive_interceptor_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut config = WardenConfig::default();
    config.ledger.db_path = dir.path().join("ledger.db");
    let query = "aGVsbG8gd29ybGQgdGhpcyBpcyBleGZpbA7x9.tunnel.example.com";

    {
        let warden = QueryInterceptor::from_config(config.clone()).unwrap();
        assert!(warden.on_query(query).decision.is_flagged());
        warden.ledger().flush().unwrap();
    }

    // A new interceptor over the same path sees the earlier flag
    let warden = QueryInterceptor::from_config(config).unwrap();
    let entries = warden.ledger().list_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].query, query);
}
