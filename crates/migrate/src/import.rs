//! Import phase: create every exported dashboard in the target account.
//!
//! Invariants:
//! - Each entity is transformed, then created once; nothing is retried.
//! - Outcomes are keyed by the source guid. Two exports of the same source
//!   dashboard are both created and the outcome that completes last is kept.
//! - A failed item is reported through the sink and never stops the others.

use nerdgraph_client::endpoints::create_dashboard;
use nerdgraph_client::{ClientError, CreatedDashboard, DashboardEntity, QueryExecutor};
use nerdgraph_config::AccountId;

use crate::error::{MigrationError, Result};
use crate::events::{EventSink, MigrationEvent};
use crate::outcome::{ImportOutcome, ImportResults};
use crate::pool::run_bounded;
use crate::transform::prepare_for_import;

/// Create copies of `exported` in `target_account_id`, at most `concurrency` at a time.
pub async fn import_all<E: QueryExecutor>(
    executor: &E,
    exported: &[DashboardEntity],
    source_account_id: AccountId,
    target_account_id: AccountId,
    concurrency: usize,
    events: &dyn EventSink,
) -> ImportResults {
    events.emit(MigrationEvent::ImportStarted {
        account_id: target_account_id,
        total: exported.len(),
    });

    let outcomes = run_bounded(exported, concurrency, |entity| async move {
        let source_guid = entity.guid.clone().unwrap_or_default();
        events.emit(MigrationEvent::CreatingDashboard {
            source_guid: source_guid.clone(),
            name: entity.name.clone(),
        });

        let input = prepare_for_import(entity, source_account_id, target_account_id);
        match create(executor, target_account_id, &input).await {
            Ok(created) => {
                events.emit(MigrationEvent::DashboardCreated {
                    source_guid: source_guid.clone(),
                    guid: created.guid.clone(),
                    name: created.name.clone(),
                });
                ImportOutcome::Success {
                    source_guid,
                    created,
                }
            }
            Err(error) => {
                let message = error.to_string();
                events.emit(MigrationEvent::ImportFailed {
                    source_guid: source_guid.clone(),
                    message: message.clone(),
                });
                ImportOutcome::Failure {
                    source_guid,
                    message,
                }
            }
        }
    })
    .await;

    let results: ImportResults = outcomes.into_iter().collect();
    events.emit(MigrationEvent::ImportFinished {
        imported: results.success_count(),
        failed: results.failure_count(),
    });

    results
}

async fn create<E: QueryExecutor>(
    executor: &E,
    account_id: AccountId,
    dashboard: &DashboardEntity,
) -> Result<CreatedDashboard> {
    let result = create_dashboard(executor, account_id, dashboard).await?;

    if let Some(error) = result.first_error() {
        return Err(MigrationError::DashboardCreate(error.description.clone()));
    }

    result.entity_result.ok_or_else(|| {
        MigrationError::Client(ClientError::InvalidResponse(
            "dashboardCreate returned neither entityResult nor errors".to_string(),
        ))
    })
}
