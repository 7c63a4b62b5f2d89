//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the NerdGraph client against a wiremock server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

// Re-export test utilities from nerdgraph-client
#[allow(unused_imports)]
pub use nerdgraph_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use nerdgraph_client::{ClientError, NerdGraphClient, endpoints};
#[allow(unused_imports)]
pub use nerdgraph_config::AccountId;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock NerdGraph endpoint is mounted on.
#[allow(dead_code)]
pub const GRAPHQL_PATH: &str = "/graphql";

/// Test user key; never a real credential.
#[allow(dead_code)]
pub const TEST_KEY: &str = "NRAK-TESTKEY";

/// Build a client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> NerdGraphClient {
    NerdGraphClient::builder()
        .endpoint(format!("{}{}", server.uri(), GRAPHQL_PATH))
        .api_key(secrecy::SecretString::new(TEST_KEY.to_string().into()))
        .build()
        .expect("client should build")
}
