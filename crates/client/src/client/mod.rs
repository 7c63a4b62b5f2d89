//! Main NerdGraph HTTP client.
//!
//! This module provides [`NerdGraphClient`], the production [`QueryExecutor`]
//! that POSTs GraphQL requests to a NerdGraph endpoint over HTTPS.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Query documents and response decoding (delegated to [`crate::endpoints`])
//! - Retries or backoff (a failed call is reported once and never repeated)
//!
//! # Invariants
//! - Only 200 and 201 are treated as success; every other status becomes
//!   [`ClientError::ApiError`] carrying the response body text.
//! - The user key is sent in the `API-Key` header and never logged.

pub mod builder;

use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, Result};
use crate::graphql::{GraphQlRequest, GraphQlResponse, QueryExecutor};

/// Header carrying the New Relic user key.
const API_KEY_HEADER: &str = "API-Key";

/// NerdGraph GraphQL client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use nerdgraph_client::NerdGraphClient;
/// use secrecy::SecretString;
///
/// let client = NerdGraphClient::builder()
///     .endpoint("https://api.newrelic.com/graphql".to_string())
///     .api_key(SecretString::new("NRAK-...".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct NerdGraphClient {
    pub(crate) http: reqwest::Client,
    pub(crate) endpoint: String,
    pub(crate) api_key: SecretString,
    pub(crate) user_agent: String,
}

impl NerdGraphClient {
    /// Create a new client builder.
    pub fn builder() -> builder::NerdGraphClientBuilder {
        builder::NerdGraphClientBuilder::new()
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, request: &GraphQlRequest) -> Result<GraphQlResponse> {
        let api_key = HeaderValue::from_str(self.api_key.expose_secret())
            .map_err(|_| ClientError::MissingApiKey)?;

        if tracing::enabled!(tracing::Level::TRACE) {
            let body = serde_json::to_string(request).unwrap_or_default();
            tracing::trace!(endpoint = %self.endpoint, %body, "Sending GraphQL request");
        }

        let response = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, api_key)
            .header(USER_AGENT, self.user_agent.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !ClientError::is_success_status(status) {
            let url = response.url().to_string();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response body".to_string());
            tracing::debug!(status, %url, "NerdGraph returned a non-success status");
            return Err(ClientError::ApiError {
                status,
                url,
                message,
            });
        }

        let body: serde_json::Value = response.json().await?;
        tracing::trace!(%body, "Received GraphQL response");

        GraphQlResponse::from_body(body)
    }
}

impl QueryExecutor for NerdGraphClient {
    async fn execute(&self, request: GraphQlRequest) -> Result<GraphQlResponse> {
        self.post(&request).await
    }
}
