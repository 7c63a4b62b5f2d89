//! Configuration management for the NerdGraph dashboard migration.
//!
//! This crate provides the types and the loader for the migration
//! configuration file: which dashboards to copy, the source and target
//! accounts, and the user keys used to talk to each of them.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AccountConfig, AccountId, ConcurrencyConfig, DashboardReference, MigrationConfig};
