//! Per-dashboard migration errors.
//!
//! These never abort a run: the coordinators turn each one into the message
//! of a failed outcome through its `Display` text.

use nerdgraph_client::ClientError;
use nerdgraph_config::AccountId;
use thiserror::Error;

/// Result type alias for per-dashboard operations.
pub type Result<T> = std::result::Result<T, MigrationError>;

#[derive(Error, Debug)]
pub enum MigrationError {
    /// The entity query answered with a `null` entity.
    #[error("No dashboard found with the guid {guid}")]
    DashboardNotFound { guid: String },

    /// The name search matched nothing.
    #[error("No dashboard found in account {account_id} with the name {name}")]
    NoDashboardNamed { account_id: AccountId, name: String },

    /// The name search matched several dashboards.
    #[error("More than one dashboard found in account {account_id} with the name {name}")]
    AmbiguousDashboardName { account_id: AccountId, name: String },

    /// `dashboardCreate` reported a domain error; holds its first description.
    #[error("{0}")]
    DashboardCreate(String),

    /// Transport, status, or GraphQL error from the client.
    #[error(transparent)]
    Client(#[from] ClientError),
}
