//! Progress and failure events emitted by the migration core.
//!
//! Responsibilities:
//! - Define [`MigrationEvent`], the owned record of everything the core reports.
//! - Define [`EventSink`], the seam through which those events leave the core.
//! - Provide [`TracingEvents`], the production sink that logs via `tracing`.
//!
//! Does NOT handle:
//! - Subscriber setup or level filtering (done once by the binary).
//! - Report rows (see [`crate::collate`]).
//!
//! Invariants:
//! - The core never calls `tracing` for per-dashboard progress directly; it
//!   always goes through the sink it was handed.
//! - Events are emitted from the single task polling the pool, so sinks need
//!   no ordering guarantees beyond `Sync`.

use nerdgraph_config::AccountId;

/// Something worth reporting while a migration runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationEvent {
    ExportStarted {
        account_id: AccountId,
        total: usize,
    },
    ResolvingName {
        account_id: AccountId,
        name: String,
    },
    NameResolved {
        name: String,
        guid: String,
    },
    FetchingEntity {
        guid: String,
    },
    EntityFetched {
        guid: String,
        name: String,
    },
    ExportFailed {
        label: String,
        message: String,
    },
    ExportFinished {
        exported: usize,
        failed: usize,
    },
    ImportStarted {
        account_id: AccountId,
        total: usize,
    },
    CreatingDashboard {
        source_guid: String,
        name: String,
    },
    DashboardCreated {
        source_guid: String,
        guid: String,
        name: String,
    },
    ImportFailed {
        source_guid: String,
        message: String,
    },
    ImportFinished {
        imported: usize,
        failed: usize,
    },
}

/// Receives migration events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: MigrationEvent);
}

/// Logs events through `tracing`: progress at info, completions at debug,
/// failures at error.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEvents;

impl EventSink for TracingEvents {
    fn emit(&self, event: MigrationEvent) {
        match event {
            MigrationEvent::ExportStarted { account_id, total } => {
                tracing::info!(%account_id, total, "Exporting dashboards from source account");
            }
            MigrationEvent::ResolvingName { account_id, name } => {
                tracing::info!(%account_id, %name, "Retrieving dashboard guid by name");
            }
            MigrationEvent::NameResolved { name, guid } => {
                tracing::debug!(%name, %guid, "Retrieved dashboard guid");
            }
            MigrationEvent::FetchingEntity { guid } => {
                tracing::info!(%guid, "Exporting dashboard");
            }
            MigrationEvent::EntityFetched { guid, name } => {
                tracing::debug!(%guid, %name, "Exported dashboard");
            }
            MigrationEvent::ExportFailed { label, message } => {
                tracing::error!(dashboard = %label, error = %message, "Dashboard export failed");
            }
            MigrationEvent::ExportFinished { exported, failed } => {
                tracing::debug!(exported, failed, "Export phase finished");
            }
            MigrationEvent::ImportStarted { account_id, total } => {
                tracing::info!(%account_id, total, "Importing dashboards into target account");
            }
            MigrationEvent::CreatingDashboard { source_guid, name } => {
                tracing::info!(%source_guid, %name, "Importing dashboard");
            }
            MigrationEvent::DashboardCreated {
                source_guid,
                guid,
                name,
            } => {
                tracing::debug!(%source_guid, %guid, %name, "Imported dashboard");
            }
            MigrationEvent::ImportFailed {
                source_guid,
                message,
            } => {
                tracing::error!(%source_guid, error = %message, "Dashboard import failed");
            }
            MigrationEvent::ImportFinished { imported, failed } => {
                tracing::debug!(imported, failed, "Import phase finished");
            }
        }
    }
}

#[cfg(any(feature = "test-utils", test))]
pub use recording::RecordingEvents;

#[cfg(any(feature = "test-utils", test))]
mod recording {
    use std::sync::Mutex;

    use super::{EventSink, MigrationEvent};

    /// Captures events in emission order.
    #[derive(Debug, Default)]
    pub struct RecordingEvents {
        events: Mutex<Vec<MigrationEvent>>,
    }

    impl RecordingEvents {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<MigrationEvent> {
            self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
        }

        /// Events for which `predicate` holds, in emission order.
        pub fn matching(&self, predicate: impl Fn(&MigrationEvent) -> bool) -> Vec<MigrationEvent> {
            self.events().into_iter().filter(|e| predicate(e)).collect()
        }
    }

    impl EventSink for RecordingEvents {
        fn emit(&self, event: MigrationEvent) {
            self.events
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(event);
        }
    }
}
