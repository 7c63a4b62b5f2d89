//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map errors found in an `anyhow` chain to those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Per-dashboard failures, which end up in the report and never change
//!   the exit code.
//!
//! Invariants:
//! - A run where every dashboard failed still exits with `Success`.

use nerdgraph_config::ConfigError;

use crate::report::ReportError;

/// Structured exit codes for nr-dashboard-utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The run completed; individual dashboards may still have failed.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The configuration file or environment is missing or invalid.
    ///
    /// Nothing was exported.
    ConfigError = 2,

    /// The migration ran but the CSV report could not be written.
    ReportWriteError = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigError;
            }
            if cause.downcast_ref::<ReportError>().is_some() {
                return ExitCode::ReportWriteError;
            }
        }

        ExitCode::GeneralError
    }
}
