//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading and validation failures.
//!
//! Does NOT handle:
//! - Errors raised while talking to NerdGraph (see the client crate).
//!
//! Invariants:
//! - Missing-field messages match the wording users of the tool already script against.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - No variant carries a user key.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No configuration file was given")]
    MissingConfigPath,

    #[error("Failed to read config file at {path}: {source}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Missing source account configuration")]
    MissingSource,

    #[error("Missing source account ID")]
    MissingSourceAccountId,

    #[error("Missing source account user key")]
    MissingSourceUserKey,

    #[error("Missing source account dashboard list")]
    MissingDashboardList,

    #[error("Missing target account configuration")]
    MissingTarget,

    #[error("Missing target account ID")]
    MissingTargetAccountId,

    #[error("Missing target account user key")]
    MissingTargetUserKey,

    #[error("Dashboard entry {index} must have a guid or a name")]
    InvalidDashboardEntry { index: usize },

    #[error("invalid {phase} concurrency {value}: {message}")]
    InvalidConcurrency {
        phase: &'static str,
        value: usize,
        message: String,
    },

    #[error("Invalid NerdGraph endpoint '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
