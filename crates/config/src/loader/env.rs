//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the migration-related environment variables.
//! - Apply them to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use secrecy::SecretString;

use super::builder::ConfigLoader;
use crate::constants::{ENV_GRAPHQL_URL, ENV_USER_KEY};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) {
    if let Some(key) = env_var_or_none(ENV_USER_KEY) {
        loader.set_env_user_key(Some(SecretString::new(key.into())));
    }
    if let Some(url) = env_var_or_none(ENV_GRAPHQL_URL) {
        loader.set_endpoint(Some(url));
    }
}
