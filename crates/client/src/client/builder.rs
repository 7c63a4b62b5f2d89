//! Client builder for constructing [`NerdGraphClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (endpoint, api_key)
//! - Configuring the underlying HTTP client
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`NerdGraphClient`] in `mod.rs`)
//! - Choosing which account's key to use (handled by the caller via [`NerdGraphClientBuilder::from_account`])
//!
//! # Invariants
//! - `api_key` is required and must not be blank
//! - The endpoint must be an absolute http(s) URL

use nerdgraph_config::AccountConfig;
use nerdgraph_config::constants::{APP_NAME, DEFAULT_GRAPHQL_ENDPOINT};
use secrecy::{ExposeSecret, SecretString};

use crate::client::NerdGraphClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`NerdGraphClient`].
///
/// The endpoint defaults to the US NerdGraph URL; the user key has no default.
pub struct NerdGraphClientBuilder {
    endpoint: String,
    api_key: Option<SecretString>,
    user_agent: String,
}

impl Default for NerdGraphClientBuilder {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            api_key: None,
            user_agent: default_user_agent(),
        }
    }
}

/// `nr-dashboard-utility/<version>`.
pub fn default_user_agent() -> String {
    format!("{APP_NAME}/{}", env!("CARGO_PKG_VERSION"))
}

impl NerdGraphClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the GraphQL endpoint URL.
    pub fn endpoint(mut self, url: String) -> Self {
        self.endpoint = url;
        self
    }

    /// Set the user key sent in the `API-Key` header.
    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Use the user key of one side of the migration.
    pub fn from_account(self, account: &AccountConfig) -> Self {
        self.api_key(account.user_key.clone())
    }

    /// Build the [`NerdGraphClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingApiKey`] if no non-blank key was provided.
    /// Returns [`ClientError::InvalidUrl`] if the endpoint is not an http(s) URL.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<NerdGraphClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ClientError::MissingApiKey)?;

        let endpoint = self.endpoint.trim().to_string();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ClientError::InvalidUrl(format!(
                "endpoint must be an http(s) URL, got '{endpoint}'"
            )));
        }

        let http = reqwest::Client::builder().build()?;

        Ok(NerdGraphClient {
            http,
            endpoint,
            api_key,
            user_agent: self.user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nerdgraph_config::AccountId;

    fn key(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    #[test]
    fn test_build_uses_default_endpoint() {
        let client = NerdGraphClient::builder()
            .api_key(key("NRAK-TEST"))
            .build()
            .unwrap();

        assert_eq!(client.endpoint(), DEFAULT_GRAPHQL_ENDPOINT);
        assert!(client.user_agent.starts_with("nr-dashboard-utility/"));
    }

    #[test]
    fn test_build_requires_api_key() {
        let err = NerdGraphClient::builder().build().unwrap_err();
        assert!(matches!(err, ClientError::MissingApiKey));

        let err = NerdGraphClient::builder()
            .api_key(key("   "))
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingApiKey));
    }

    #[test]
    fn test_build_rejects_non_http_endpoint() {
        let err = NerdGraphClient::builder()
            .endpoint("ftp://example.com/graphql".to_string())
            .api_key(key("NRAK-TEST"))
            .build()
            .unwrap_err();

        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_account_takes_user_key() {
        let account = AccountConfig {
            account_id: AccountId::new(42),
            user_key: key("NRAK-SOURCE"),
        };

        let client = NerdGraphClient::builder()
            .from_account(&account)
            .endpoint("http://localhost:8080/graphql".to_string())
            .build()
            .unwrap();

        assert_eq!(client.api_key.expose_secret(), "NRAK-SOURCE");
        assert_eq!(client.endpoint(), "http://localhost:8080/graphql");
    }
}
