//! Shared test utilities for nr-dashboard-utility integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write migration config files pointing at a mock NerdGraph.
//! - Mount the NerdGraph responses a scenario needs.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - User keys are dummy values; the source and target keys differ so tests
//!   can tell which client sent a request.

use assert_cmd::Command;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const SOURCE_KEY: &str = "NRAK-SOURCE";
#[allow(dead_code)]
pub const TARGET_KEY: &str = "NRAK-TARGET";

/// Returns a hermetic `nr-dashboard-utility` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Host New Relic settings and `RUST_LOG` are cleared.
pub fn nr_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("nr-dashboard-utility");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("NEW_RELIC_USER_KEY")
        .env_remove("NEW_RELIC_GRAPHQL_URL")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `contents` as `migrate.yml` inside `dir`.
#[allow(dead_code)]
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("migrate.yml");
    std::fs::write(&path, contents).expect("config should be written");
    path
}

/// A complete config for accounts 1234567 -> 7654321 against `server`.
#[allow(dead_code)]
pub fn config_yaml(server: &MockServer, dashboards: &str) -> String {
    format!(
        "endpoint: {}/graphql\n\
         source:\n  accountId: 1234567\n  userKey: {SOURCE_KEY}\n  dashboards:\n{dashboards}\
         target:\n  accountId: 7654321\n  userKey: {TARGET_KEY}\n",
        server.uri()
    )
}

#[allow(dead_code)]
pub async fn mount_entity(server: &MockServer, guid: &str, name: &str) {
    let body = json!({
        "data": { "actor": { "entity": {
            "guid": guid,
            "name": name,
            "permissions": "PUBLIC_READ_WRITE",
            "pages": [{
                "name": name,
                "widgets": [{
                    "visualization": { "id": "viz.billboard" },
                    "title": "Count",
                    "layout": { "row": 1, "column": 1, "width": 4, "height": 3 },
                    "rawConfiguration": {
                        "nrqlQueries": [{ "accountId": 1234567, "query": "SELECT count(*) FROM Transaction" }]
                    }
                }]
            }]
        }}}
    });
    mount_operation(
        server,
        SOURCE_KEY,
        json!({ "operationName": "DashboardEntity", "variables": { "guid": guid } }),
        body,
    )
    .await;
}

#[allow(dead_code)]
pub async fn mount_entity_error(server: &MockServer, guid: &str, message: &str) {
    mount_operation(
        server,
        SOURCE_KEY,
        json!({ "operationName": "DashboardEntity", "variables": { "guid": guid } }),
        json!({ "data": null, "errors": [{ "message": message }] }),
    )
    .await;
}

#[allow(dead_code)]
pub async fn mount_search(server: &MockServer, name: &str, guids: &[&str]) {
    let entities: Vec<Value> = guids.iter().map(|g| json!({ "guid": g })).collect();
    mount_operation(
        server,
        SOURCE_KEY,
        json!({
            "operationName": "DashboardSearch",
            "variables": {
                "query": format!("name = '{name}' AND tags.accountId = '1234567' AND type IN ('DASHBOARD')")
            }
        }),
        json!({ "data": { "actor": { "entitySearch": { "results": { "entities": entities } } } } }),
    )
    .await;
}

#[allow(dead_code)]
pub async fn mount_create(server: &MockServer, name: &str, new_guid: &str) {
    mount_operation(
        server,
        TARGET_KEY,
        json!({
            "operationName": "DashboardCreate",
            "variables": { "accountId": 7654321, "dashboard": { "name": name } }
        }),
        json!({ "data": { "dashboardCreate": {
            "entityResult": { "guid": new_guid, "name": name },
            "errors": null
        }}}),
    )
    .await;
}

#[allow(dead_code)]
pub async fn mount_create_error(server: &MockServer, name: &str, description: &str) {
    mount_operation(
        server,
        TARGET_KEY,
        json!({
            "operationName": "DashboardCreate",
            "variables": { "dashboard": { "name": name } }
        }),
        json!({ "data": { "dashboardCreate": {
            "entityResult": null,
            "errors": [{ "description": description, "type": "INVALID_INPUT" }]
        }}}),
    )
    .await;
}

async fn mount_operation(server: &MockServer, key: &str, body: Value, response: Value) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("API-Key", key))
        .and(body_partial_json(body))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}
