//! Dashboard migration core.
//!
//! This crate copies dashboards between New Relic accounts in two bounded
//! concurrent phases. The export phase resolves each configured reference to
//! a full dashboard entity in the source account. The import phase rewrites
//! account-scoped queries and creates each exported dashboard in the target
//! account. Outcomes from both phases are joined into one report row per
//! configured dashboard.
//!
//! Nothing here aborts on a single dashboard's failure, and nothing here
//! retries. Progress leaves the crate only through an [`EventSink`].

pub mod collate;
pub mod error;
pub mod events;
pub mod export;
pub mod fetcher;
pub mod import;
pub mod outcome;
pub mod pipeline;
pub mod pool;
pub mod transform;

pub use collate::{MigrationRecord, MigrationSummary, collate};
pub use error::{MigrationError, Result};
#[cfg(any(feature = "test-utils", test))]
pub use events::RecordingEvents;
pub use events::{EventSink, MigrationEvent, TracingEvents};
pub use export::export_all;
pub use fetcher::resolve;
pub use import::import_all;
pub use outcome::{ExportOutcome, ImportOutcome, ImportResults};
pub use pipeline::{MigrationReport, migrate};
pub use pool::run_bounded;
pub use transform::prepare_for_import;
