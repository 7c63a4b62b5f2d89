//! Per-dashboard outcomes of the export and import phases.
//!
//! Invariants:
//! - A successful [`ExportOutcome`] always holds an entity with a `guid`.
//! - [`ImportResults`] is keyed by source guid and exposes lookup and counts
//!   only; its iteration order carries no meaning and is not offered.

use std::collections::HashMap;

use nerdgraph_client::{CreatedDashboard, DashboardEntity};

/// Result of exporting the dashboard at configuration position `index`.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Success {
        entity: DashboardEntity,
        index: usize,
    },
    Failure {
        message: String,
        index: usize,
    },
}

impl ExportOutcome {
    pub fn index(&self) -> usize {
        match self {
            Self::Success { index, .. } | Self::Failure { index, .. } => *index,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn entity(&self) -> Option<&DashboardEntity> {
        match self {
            Self::Success { entity, .. } => Some(entity),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, .. } => Some(message),
        }
    }
}

/// Result of creating one exported dashboard in the target account.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    Success {
        source_guid: String,
        created: CreatedDashboard,
    },
    Failure {
        source_guid: String,
        message: String,
    },
}

impl ImportOutcome {
    pub fn source_guid(&self) -> &str {
        match self {
            Self::Success { source_guid, .. } | Self::Failure { source_guid, .. } => source_guid,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Import outcomes keyed by the source dashboard's guid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportResults {
    by_source_guid: HashMap<String, ImportOutcome>,
}

impl ImportResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome, replacing any earlier one for the same source guid.
    pub fn insert(&mut self, outcome: ImportOutcome) {
        self.by_source_guid
            .insert(outcome.source_guid().to_string(), outcome);
    }

    pub fn get(&self, source_guid: &str) -> Option<&ImportOutcome> {
        self.by_source_guid.get(source_guid)
    }

    pub fn len(&self) -> usize {
        self.by_source_guid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_source_guid.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.by_source_guid
            .values()
            .filter(|outcome| outcome.is_success())
            .count()
    }

    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }
}

impl FromIterator<ImportOutcome> for ImportResults {
    fn from_iter<I: IntoIterator<Item = ImportOutcome>>(iter: I) -> Self {
        let mut results = Self::new();
        for outcome in iter {
            results.insert(outcome);
        }
        results
    }
}
