//! Join export outcomes with import results into report rows.
//!
//! Invariants:
//! - One record per export outcome, in configuration order.
//! - Target-side fields are only populated when an import outcome exists for
//!   the exported dashboard's guid.

use nerdgraph_config::{AccountId, DashboardReference};

use crate::outcome::{ExportOutcome, ImportOutcome, ImportResults};

/// One row of the migration report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRecord {
    pub source_account_id: AccountId,
    pub source_name: Option<String>,
    pub source_guid: Option<String>,
    pub export_success: bool,
    pub export_error: Option<String>,
    pub target_account_id: AccountId,
    pub target_name: Option<String>,
    pub target_guid: Option<String>,
    /// `None` when the export failed or no import was attempted.
    pub import_success: Option<bool>,
    pub import_error: Option<String>,
}

/// Counts derived from a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    pub total: usize,
    pub exported: usize,
    pub export_failures: usize,
    pub imported: usize,
    pub import_failures: usize,
}

impl MigrationSummary {
    pub fn from_records(records: &[MigrationRecord]) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            summary.total += 1;
            if record.export_success {
                summary.exported += 1;
            } else {
                summary.export_failures += 1;
            }
            match record.import_success {
                Some(true) => summary.imported += 1,
                Some(false) => summary.import_failures += 1,
                None => {}
            }
            summary
        })
    }

    /// Export failures plus import failures.
    pub fn errors(&self) -> usize {
        self.export_failures + self.import_failures
    }
}

/// Build one record per export outcome.
pub fn collate(
    source_account_id: AccountId,
    target_account_id: AccountId,
    references: &[DashboardReference],
    exports: &[ExportOutcome],
    imports: &ImportResults,
) -> Vec<MigrationRecord> {
    let mut ordered: Vec<&ExportOutcome> = exports.iter().collect();
    ordered.sort_by_key(|outcome| outcome.index());

    ordered
        .into_iter()
        .map(|outcome| {
            let blank = MigrationRecord {
                source_account_id,
                source_name: None,
                source_guid: None,
                export_success: false,
                export_error: None,
                target_account_id,
                target_name: None,
                target_guid: None,
                import_success: None,
                import_error: None,
            };

            match outcome {
                ExportOutcome::Failure { message, index } => {
                    let reference = references.get(*index).filter(|r| r.index == *index);
                    MigrationRecord {
                        source_name: reference.and_then(|r| r.name.clone()),
                        source_guid: reference.and_then(|r| r.guid.clone()),
                        export_error: Some(message.clone()),
                        ..blank
                    }
                }
                ExportOutcome::Success { entity, .. } => {
                    let imported = entity.guid.as_deref().and_then(|guid| imports.get(guid));
                    let record = MigrationRecord {
                        source_name: Some(entity.name.clone()),
                        source_guid: entity.guid.clone(),
                        export_success: true,
                        ..blank
                    };

                    match imported {
                        None => record,
                        Some(ImportOutcome::Success { created, .. }) => MigrationRecord {
                            target_name: Some(created.name.clone()),
                            target_guid: Some(created.guid.clone()),
                            import_success: Some(true),
                            ..record
                        },
                        Some(ImportOutcome::Failure { message, .. }) => MigrationRecord {
                            import_success: Some(false),
                            import_error: Some(message.clone()),
                            ..record
                        },
                    }
                }
            }
        })
        .collect()
}
