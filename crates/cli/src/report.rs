//! CSV report of a migration run.
//!
//! Responsibilities:
//! - Render one CSV row per migration record under a fixed header.
//! - Write the rendered bytes to the requested file.
//! - Format the one-line run summary.
//!
//! Does NOT handle:
//! - Deciding row order or content (see `nerdgraph_migrate::collate`).
//! - Path validation / directory creation.

use std::path::{Path, PathBuf};

use nerdgraph_migrate::{MigrationRecord, MigrationSummary};
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

pub const HEADERS: [&str; 10] = [
    "Source Account ID",
    "Source Name",
    "Source GUID",
    "Source Export Success?",
    "Source Export Error",
    "Target Account ID",
    "Target Name",
    "Target GUID",
    "Target Import Success?",
    "Target Import Error",
];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to encode CSV report: {0}")]
    Encode(#[from] csv::Error),

    #[error("Failed to write report to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn flag(value: bool) -> &'static str {
    if value { "Y" } else { "N" }
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn row(record: &MigrationRecord) -> [String; 10] {
    [
        record.source_account_id.to_string(),
        cell(&record.source_name).to_string(),
        cell(&record.source_guid).to_string(),
        flag(record.export_success).to_string(),
        cell(&record.export_error).to_string(),
        record.target_account_id.to_string(),
        cell(&record.target_name).to_string(),
        cell(&record.target_guid).to_string(),
        record.import_success.map(flag).unwrap_or("").to_string(),
        cell(&record.import_error).to_string(),
    ]
}

/// Render the report as CSV bytes.
pub fn render(records: &[MigrationRecord]) -> Result<Vec<u8>, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;
    for record in records {
        writer.write_record(row(record))?;
    }
    writer
        .into_inner()
        .map_err(|e| ReportError::Encode(e.into_error().into()))
}

/// Render the report and write it to `path`, replacing any existing file.
pub async fn write_report(records: &[MigrationRecord], path: &Path) -> Result<(), ReportError> {
    // The csv crate has no async API, so we buffer in memory first
    let buffer = render(records)?;

    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).await.map_err(write_err)?;
    file.write_all(&buffer).await.map_err(write_err)?;
    file.flush().await.map_err(write_err)?;

    Ok(())
}

/// `"<exported> dashboards exported, <imported> imported with <errors> errors."`
pub fn summary_line(summary: &MigrationSummary) -> String {
    format!(
        "{} dashboards exported, {} imported with {} errors.",
        summary.exported,
        summary.imported,
        summary.errors()
    )
}
