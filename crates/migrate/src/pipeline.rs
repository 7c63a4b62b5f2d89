//! End-to-end migration: export, filter, import, collate.
//!
//! The phases run strictly one after another; no import starts before the
//! last export has finished.

use nerdgraph_client::{DashboardEntity, QueryExecutor};
use nerdgraph_config::MigrationConfig;

use crate::collate::{MigrationRecord, MigrationSummary, collate};
use crate::events::EventSink;
use crate::export::export_all;
use crate::import::import_all;

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationReport {
    pub records: Vec<MigrationRecord>,
    pub summary: MigrationSummary,
}

/// Copy the configured dashboards from the source account to the target account.
///
/// Per-dashboard failures end up in the report; this function itself cannot fail.
pub async fn migrate<S, T>(
    source_executor: &S,
    target_executor: &T,
    config: &MigrationConfig,
    events: &dyn EventSink,
) -> MigrationReport
where
    S: QueryExecutor,
    T: QueryExecutor,
{
    let source_account_id = config.source.account_id;
    let target_account_id = config.target.account_id;

    let exports = export_all(
        source_executor,
        &config.dashboards,
        source_account_id,
        config.concurrency.export,
        events,
    )
    .await;

    let exported: Vec<DashboardEntity> = exports
        .iter()
        .filter_map(|outcome| outcome.entity().cloned())
        .collect();
    tracing::debug!(
        total = exports.len(),
        exported = exported.len(),
        "Collected export outcomes"
    );
    tracing::trace!(?exports, "Export outcomes");

    let imports = import_all(
        target_executor,
        &exported,
        source_account_id,
        target_account_id,
        config.concurrency.import,
        events,
    )
    .await;
    tracing::debug!(
        imported = imports.success_count(),
        failed = imports.failure_count(),
        "Collected import outcomes"
    );
    tracing::trace!(?imports, "Import outcomes");

    let records = collate(
        source_account_id,
        target_account_id,
        &config.dashboards,
        &exports,
        &imports,
    );
    let summary = MigrationSummary::from_records(&records);

    MigrationReport { records, summary }
}
