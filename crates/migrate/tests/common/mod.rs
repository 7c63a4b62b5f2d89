//! Shared fixtures for migration integration tests.
//!
//! # What this does NOT handle
//! - Assertions (each test states its own)

use std::time::Duration;

use nerdgraph_client::testing::{Reply, Rule, created_data, entity_data, search_data};
use nerdgraph_config::{
    AccountConfig, AccountId, ConcurrencyConfig, DashboardReference, MigrationConfig,
};
use secrecy::SecretString;
use serde_json::json;

#[allow(dead_code)]
pub const SOURCE: AccountId = AccountId::new(1234567);
#[allow(dead_code)]
pub const TARGET: AccountId = AccountId::new(7654321);

/// A fetchable dashboard whose single widget queries the source account.
#[allow(dead_code)]
pub fn entity_rule(guid: &str, name: &str) -> Rule {
    Rule::operation("DashboardEntity")
        .with_variable("/guid", guid)
        .reply(Reply::data(entity_data(json!({
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
                        "nrqlQueries": [{ "accountId": SOURCE.get(), "query": "SELECT count(*) FROM Transaction" }]
                    }
                }]
            }]
        }))))
}

#[allow(dead_code)]
pub fn slow_entity_rule(guid: &str, name: &str, delay_ms: u64) -> Rule {
    entity_rule(guid, name).after(Duration::from_millis(delay_ms))
}

#[allow(dead_code)]
pub fn search_rule(name: &str, guids: &[&str]) -> Rule {
    Rule::operation("DashboardSearch")
        .with_variable(
            "/query",
            format!("name = '{name}' AND tags.accountId = '{SOURCE}' AND type IN ('DASHBOARD')"),
        )
        .reply(Reply::data(search_data(guids)))
}

#[allow(dead_code)]
pub fn create_rule(name: &str, new_guid: &str) -> Rule {
    Rule::operation("DashboardCreate")
        .with_variable("/dashboard/name", name)
        .reply(Reply::data(created_data(new_guid, name)))
}

#[allow(dead_code)]
pub fn config(dashboards: Vec<DashboardReference>, export: usize, import: usize) -> MigrationConfig {
    MigrationConfig {
        source: AccountConfig {
            account_id: SOURCE,
            user_key: SecretString::new("NRAK-SOURCE".to_string().into()),
        },
        target: AccountConfig {
            account_id: TARGET,
            user_key: SecretString::new("NRAK-TARGET".to_string().into()),
        },
        dashboards,
        concurrency: ConcurrencyConfig { export, import },
        endpoint: "https://api.newrelic.com/graphql".to_string(),
    }
}
