//! Export phase: resolve every configured dashboard with bounded concurrency.
//!
//! Invariants:
//! - Exactly one outcome per reference, carrying the reference's index.
//! - The returned list is sorted by index, whatever the completion order was.
//! - A failed item is reported through the sink and never stops the others.

use nerdgraph_client::QueryExecutor;
use nerdgraph_config::{AccountId, DashboardReference};

use crate::events::{EventSink, MigrationEvent};
use crate::fetcher::resolve;
use crate::outcome::ExportOutcome;
use crate::pool::run_bounded;

/// Export `references` from `account_id`, at most `concurrency` at a time.
pub async fn export_all<E: QueryExecutor>(
    executor: &E,
    references: &[DashboardReference],
    account_id: AccountId,
    concurrency: usize,
    events: &dyn EventSink,
) -> Vec<ExportOutcome> {
    events.emit(MigrationEvent::ExportStarted {
        account_id,
        total: references.len(),
    });

    let mut outcomes = run_bounded(references, concurrency, |reference| async move {
        match resolve(executor, reference, account_id, events).await {
            Ok(entity) => ExportOutcome::Success {
                entity,
                index: reference.index,
            },
            Err(error) => {
                let message = error.to_string();
                events.emit(MigrationEvent::ExportFailed {
                    label: reference.label().to_string(),
                    message: message.clone(),
                });
                ExportOutcome::Failure {
                    message,
                    index: reference.index,
                }
            }
        }
    })
    .await;

    outcomes.sort_by_key(ExportOutcome::index);

    let exported = outcomes.iter().filter(|o| o.is_success()).count();
    events.emit(MigrationEvent::ExportFinished {
        exported,
        failed: outcomes.len() - exported,
    });

    outcomes
}
