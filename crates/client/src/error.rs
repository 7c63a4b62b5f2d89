//! Error types for the NerdGraph client.

use thiserror::Error;

use crate::graphql::GraphQlError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during NerdGraph client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection refused, DNS, TLS, body decoding).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success HTTP status from NerdGraph.
    #[error("GraphQL API call failed with status {status} at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The response carried a GraphQL `errors` list.
    ///
    /// Displays only the first error's message, which is what ends up in
    /// per-dashboard reports.
    #[error("{message}")]
    GraphQl {
        message: String,
        errors: Vec<GraphQlError>,
    },

    /// The response body did not have the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The guid exists but does not identify a dashboard.
    #[error("Entity {guid} is not a dashboard")]
    NotADashboard { guid: String },

    /// Invalid endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client was built without a user key.
    #[error("A NerdGraph user key is required")]
    MissingApiKey,
}

impl ClientError {
    /// Check if an HTTP status code is one NerdGraph answers successfully with.
    pub fn is_success_status(status: u16) -> bool {
        matches!(status, 200 | 201)
    }

    /// Check if this error came from the GraphQL layer rather than transport.
    pub fn is_graphql(&self) -> bool {
        matches!(self, Self::GraphQl { .. })
    }
}
