//! Configuration types for the dashboard migration.
//!
//! Responsibilities:
//! - Define the validated, immutable configuration handed to the client and core.
//! - Define the `AccountId` newtype and its lenient (number or string) decoding.
//!
//! Does NOT handle:
//! - Reading or validating files (see `loader`).
//!
//! Invariants:
//! - User keys are `secrecy::SecretString` so `Debug` output never leaks them.
//! - `DashboardReference::index` is the entry's position in the configured list.

use secrecy::SecretString;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::constants::{DEFAULT_EXPORT_CONCURRENCY, DEFAULT_IMPORT_CONCURRENCY};

/// A New Relic account identifier.
///
/// NerdGraph types account ids as `Int`, but YAML configs frequently quote
/// them, so both `1234` and `"1234"` decode to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(u64);

impl AccountId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AccountId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for AccountId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(id) => Ok(Self(id)),
            Repr::Text(text) => text
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid account id '{text}'"))),
        }
    }
}

/// One configured dashboard to migrate.
///
/// At least one of `guid` or `name` is set; when both are, the guid wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardReference {
    pub guid: Option<String>,
    pub name: Option<String>,
    pub index: usize,
}

impl DashboardReference {
    pub fn by_guid(index: usize, guid: impl Into<String>) -> Self {
        Self {
            guid: Some(guid.into()),
            name: None,
            index,
        }
    }

    pub fn by_name(index: usize, name: impl Into<String>) -> Self {
        Self {
            guid: None,
            name: Some(name.into()),
            index,
        }
    }

    /// Human-readable label: the name if configured, otherwise the guid.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.guid.as_deref())
            .unwrap_or("<unnamed>")
    }
}

/// Account id plus the user key used to call NerdGraph on its behalf.
#[derive(Debug, Clone)]
pub struct AccountConfig {
    pub account_id: AccountId,
    pub user_key: SecretString,
}

/// Pool sizes for the two migration phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrencyConfig {
    pub export: usize,
    pub import: usize,
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            export: DEFAULT_EXPORT_CONCURRENCY,
            import: DEFAULT_IMPORT_CONCURRENCY,
        }
    }
}

/// Fully validated migration configuration.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    pub source: AccountConfig,
    pub target: AccountConfig,
    pub dashboards: Vec<DashboardReference>,
    pub concurrency: ConcurrencyConfig,
    pub endpoint: String,
}
