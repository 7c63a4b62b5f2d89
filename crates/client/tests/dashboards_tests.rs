//! Dashboard endpoint tests.
//!
//! This module tests the NerdGraph dashboard operations:
//! - Fetching a dashboard entity by guid
//! - Searching dashboard guids by name within an account
//! - Creating a dashboard in an account
//!
//! # Invariants
//! - A `null` entity is `Ok(None)`, never an error
//! - The name search sends its filter as a variable, not inline in the document
//! - `dashboardCreate` domain errors are returned as data

mod common;

use common::*;
use nerdgraph_client::{DashboardEntity, Page};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};

#[tokio::test]
async fn test_get_dashboard_entity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "operationName": "DashboardEntity",
            "variables": { "guid": "MXxWSVp8REFTSEJPQVJEfDEyMw" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/entity.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let entity = endpoints::get_dashboard_entity(&client, "MXxWSVp8REFTSEJPQVJEfDEyMw")
        .await
        .unwrap()
        .expect("entity should be present");

    assert_eq!(entity.name, "Golden Signals");
    assert_eq!(entity.permissions.as_deref(), Some("PUBLIC_READ_WRITE"));
    let pages = entity.pages.as_ref().unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].widgets.as_ref().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_dashboard_entity_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/entity_not_found.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let entity = endpoints::get_dashboard_entity(&client, "missing").await.unwrap();

    assert!(entity.is_none());
}

#[tokio::test]
async fn test_get_dashboard_entity_rejects_non_dashboard_entity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("dashboards/entity_not_dashboard.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = endpoints::get_dashboard_entity(&client, "MXxBUE18QVBQTElDQVRJT058MQ")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NotADashboard { .. }));
    assert_eq!(
        err.to_string(),
        "Entity MXxBUE18QVBQTElDQVRJT058MQ is not a dashboard"
    );
}

#[tokio::test]
async fn test_get_dashboard_entity_graphql_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/graphql_errors.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = endpoints::get_dashboard_entity(&client, "abc")
        .await
        .unwrap_err();

    assert!(err.is_graphql());
    assert_eq!(err.to_string(), "Access denied to account 1234567");
}

#[tokio::test]
async fn test_search_dashboard_guids_sends_filter_variable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "operationName": "DashboardSearch",
            "variables": {
                "query": "name = 'Golden Signals' AND tags.accountId = '1234567' AND type IN ('DASHBOARD')"
            }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/search_single.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let guids =
        endpoints::search_dashboard_guids(&client, AccountId::new(1234567), "Golden Signals")
            .await
            .unwrap();

    assert_eq!(guids, vec!["MXxWSVp8REFTSEJPQVJEfDEyMw".to_string()]);
}

#[tokio::test]
async fn test_search_dashboard_guids_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/search_empty.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let guids = endpoints::search_dashboard_guids(&client, AccountId::new(1), "Nothing")
        .await
        .unwrap();

    assert!(guids.is_empty());
}

fn copy_input() -> DashboardEntity {
    DashboardEntity {
        guid: None,
        name: "Golden Signals".to_string(),
        description: None,
        permissions: Some("PUBLIC_READ_WRITE".to_string()),
        pages: Some(vec![Page {
            name: "Golden Signals".to_string(),
            description: None,
            widgets: Some(Vec::new()),
        }]),
    }
}

#[tokio::test]
async fn test_create_dashboard() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({
            "operationName": "DashboardCreate",
            "variables": {
                "accountId": 7654321,
                "dashboard": { "name": "Golden Signals", "permissions": "PUBLIC_READ_WRITE" }
            }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/create_success.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = endpoints::create_dashboard(&client, AccountId::new(7654321), &copy_input())
        .await
        .unwrap();

    assert!(result.first_error().is_none());
    let created = result.entity_result.expect("entityResult should be present");
    assert_eq!(created.guid, "NzY1NDMyMXxWSVp8REFTSEJPQVJEfDk4Nw");
    assert_eq!(created.name, "Golden Signals");
}

#[tokio::test]
async fn test_create_dashboard_domain_errors_are_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/create_errors.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = endpoints::create_dashboard(&client, AccountId::new(7654321), &copy_input())
        .await
        .unwrap();

    assert!(result.entity_result.is_none());
    assert_eq!(
        result.first_error().map(|e| e.description.as_str()),
        Some("Widget visualization id 'viz.unknown' is not supported")
    );
}

#[tokio::test]
async fn test_create_dashboard_missing_payload_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "dashboardCreate": null } })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = endpoints::create_dashboard(&client, AccountId::new(1), &copy_input())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}
