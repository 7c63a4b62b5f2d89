//! Configuration loader for the migration file, environment, and CLI overrides.
//!
//! Responsibilities:
//! - Read the YAML migration file into raw, all-optional sections.
//! - Layer environment variables and builder overrides on top.
//! - Validate and produce an immutable `MigrationConfig`.
//!
//! Does NOT handle:
//! - Talking to NerdGraph (see the client crate).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables, which take
//!   precedence over file values for the endpoint.
//! - User keys resolve side key, then top-level key, then `NEW_RELIC_USER_KEY`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod file;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
