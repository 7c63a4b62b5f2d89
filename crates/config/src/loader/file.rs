//! Raw YAML shape of the migration file.
//!
//! Every field is optional here so that validation in the builder can report
//! the first missing piece with a precise message instead of a serde error.

use serde::Deserialize;
use std::path::Path;

use super::error::ConfigError;
use crate::types::AccountId;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigFile {
    pub user_key: Option<String>,
    pub endpoint: Option<String>,
    pub concurrency: Option<ConcurrencySection>,
    pub source: Option<SourceSection>,
    pub target: Option<TargetSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SourceSection {
    pub account_id: Option<AccountId>,
    pub user_key: Option<String>,
    pub dashboards: Option<Vec<DashboardEntry>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TargetSection {
    pub account_id: Option<AccountId>,
    pub user_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DashboardEntry {
    pub guid: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConcurrencySection {
    pub export: Option<usize>,
    pub import: Option<usize>,
}

/// Parse YAML text; `path` is only used for error reporting.
pub(crate) fn parse_config(contents: &str, path: &Path) -> Result<ConfigFile, ConfigError> {
    // An empty document is valid YAML but not a valid struct for serde_yaml.
    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(contents).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&contents, path)
}
