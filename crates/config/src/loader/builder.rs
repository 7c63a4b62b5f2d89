//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges file, env, and CLI values.
//! - Validate the merged values and build the final `MigrationConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - YAML decoding (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Validation order mirrors the file layout: source section first, then target,
//!   then per-entry and tuning checks. The first failure wins.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::{ConfigFile, DashboardEntry, parse_config, read_config_file};
use crate::constants::{DEFAULT_GRAPHQL_ENDPOINT, ENV_DOTENV_DISABLED, MAX_CONCURRENCY};
use crate::types::{
    AccountConfig, AccountId, ConcurrencyConfig, DashboardReference, MigrationConfig,
};

/// Configuration loader that builds a `MigrationConfig` from a file, env, and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    file: Option<ConfigFile>,
    env_user_key: Option<SecretString>,
    endpoint: Option<String>,
    export_concurrency: Option<usize>,
    import_concurrency: Option<usize>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the YAML file to read in `from_file()`.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read and parse the configured YAML file.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let path = self
            .config_path
            .as_ref()
            .ok_or(ConfigError::MissingConfigPath)?;
        tracing::debug!(path = %path.display(), "Reading configuration file");
        self.file = Some(read_config_file(path)?);
        Ok(self)
    }

    /// Parse configuration from YAML text instead of a file.
    pub fn from_yaml_str(mut self, contents: &str) -> Result<Self, ConfigError> {
        let path = self
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("<inline>"));
        self.file = Some(parse_config(contents, &path)?);
        Ok(self)
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Override the NerdGraph endpoint.
    pub fn with_endpoint(mut self, url: String) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Override the export pool size.
    pub fn with_export_concurrency(mut self, value: usize) -> Self {
        self.export_concurrency = Some(value);
        self
    }

    /// Override the import pool size.
    pub fn with_import_concurrency(mut self, value: usize) -> Self {
        self.import_concurrency = Some(value);
        self
    }

    pub(crate) fn set_env_user_key(&mut self, key: Option<SecretString>) {
        self.env_user_key = key;
    }

    pub(crate) fn set_endpoint(&mut self, url: Option<String>) {
        self.endpoint = url;
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<MigrationConfig, ConfigError> {
        let file = self.file.unwrap_or_default();

        let fallback_key = non_blank(file.user_key)
            .map(|key| SecretString::new(key.into()))
            .or(self.env_user_key);

        let source = file.source.ok_or(ConfigError::MissingSource)?;
        let source_account_id =
            present_account_id(source.account_id).ok_or(ConfigError::MissingSourceAccountId)?;
        let source_key = resolve_key(source.user_key, fallback_key.as_ref())
            .ok_or(ConfigError::MissingSourceUserKey)?;
        let entries = source.dashboards.ok_or(ConfigError::MissingDashboardList)?;

        let target = file.target.ok_or(ConfigError::MissingTarget)?;
        let target_account_id =
            present_account_id(target.account_id).ok_or(ConfigError::MissingTargetAccountId)?;
        let target_key = resolve_key(target.user_key, fallback_key.as_ref())
            .ok_or(ConfigError::MissingTargetUserKey)?;

        let dashboards = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| to_reference(index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        let file_concurrency = file.concurrency.unwrap_or_default();
        let defaults = ConcurrencyConfig::default();
        let concurrency = ConcurrencyConfig {
            export: validate_concurrency(
                "export",
                self.export_concurrency
                    .or(file_concurrency.export)
                    .unwrap_or(defaults.export),
            )?,
            import: validate_concurrency(
                "import",
                self.import_concurrency
                    .or(file_concurrency.import)
                    .unwrap_or(defaults.import),
            )?,
        };

        let endpoint = self
            .endpoint
            .or_else(|| non_blank(file.endpoint))
            .unwrap_or_else(|| DEFAULT_GRAPHQL_ENDPOINT.to_string());
        validate_endpoint(&endpoint)?;

        Ok(MigrationConfig {
            source: AccountConfig {
                account_id: source_account_id,
                user_key: source_key,
            },
            target: AccountConfig {
                account_id: target_account_id,
                user_key: target_key,
            },
            dashboards,
            concurrency,
            endpoint,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Account id 0 is never a real account and is what an empty YAML scalar
/// tends to turn into, so it counts as missing.
fn present_account_id(id: Option<AccountId>) -> Option<AccountId> {
    id.filter(|id| id.get() != 0)
}

fn resolve_key(side_key: Option<String>, fallback: Option<&SecretString>) -> Option<SecretString> {
    non_blank(side_key)
        .map(|key| SecretString::new(key.into()))
        .or_else(|| fallback.cloned())
}

fn to_reference(index: usize, entry: DashboardEntry) -> Result<DashboardReference, ConfigError> {
    let guid = non_blank(entry.guid);
    let name = non_blank(entry.name);

    if guid.is_none() && name.is_none() {
        return Err(ConfigError::InvalidDashboardEntry { index });
    }

    Ok(DashboardReference { guid, name, index })
}

fn validate_concurrency(phase: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidConcurrency {
            phase,
            value,
            message: "must be greater than 0".to_string(),
        });
    }
    if value > MAX_CONCURRENCY {
        return Err(ConfigError::InvalidConcurrency {
            phase,
            value,
            message: format!("exceeds maximum of {MAX_CONCURRENCY}"),
        });
    }
    Ok(value)
}

fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(endpoint).map_err(|e| ConfigError::InvalidEndpoint {
        url: endpoint.to_string(),
        message: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidEndpoint {
            url: endpoint.to_string(),
            message: format!("unsupported scheme '{other}'"),
        }),
    }
}
