//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test YAML parsing of the migration file.
//! - Test validation order and messages.
//! - Test environment variable handling and precedence.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and the global lock.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// A complete, valid configuration used as the base for most tests.
pub const VALID_YAML: &str = r#"
source:
  accountId: 1234567
  userKey: NRAK-SOURCE
  dashboards:
    - guid: MXxWSVp8REFTSEJPQVJEfDEyMw
    - name: Golden Signals
target:
  accountId: 7654321
  userKey: NRAK-TARGET
"#;
