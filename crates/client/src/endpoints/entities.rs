//! Entity lookups: fetch a dashboard by guid, find dashboard guids by name.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::{ClientError, Result};
use crate::graphql::{GraphQlRequest, QueryExecutor};
use crate::models::DashboardEntity;
use nerdgraph_config::AccountId;

/// Fetch the full definition of a dashboard entity.
pub const DASHBOARD_ENTITY_QUERY: &str = r#"query DashboardEntity($guid: EntityGuid!) {
  actor {
    entity(guid: $guid) {
      guid
      ... on DashboardEntity {
        name
        description
        permissions
        pages {
          name
          description
          widgets {
            visualization { id }
            title
            layout { row column width height }
            rawConfiguration
          }
        }
      }
    }
  }
}"#;

/// Search entities with an entity-search filter string.
pub const DASHBOARD_SEARCH_QUERY: &str = r#"query DashboardSearch($query: String!) {
  actor {
    entitySearch(query: $query) {
      results {
        entities {
          guid
        }
      }
    }
  }
}"#;

#[derive(Deserialize)]
struct EntityData {
    actor: EntityActor,
}

#[derive(Deserialize)]
struct EntityActor {
    entity: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchData {
    actor: SearchActor,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchActor {
    entity_search: EntitySearch,
}

#[derive(Deserialize)]
struct EntitySearch {
    results: SearchResults,
}

#[derive(Deserialize)]
struct SearchResults {
    #[serde(default)]
    entities: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    guid: String,
}

/// Fetch a dashboard by guid.
///
/// Returns `Ok(None)` when NerdGraph answers with a `null` entity.
/// An entity that exists but is not a dashboard only carries `guid`, since the
/// dashboard fields sit behind the `DashboardEntity` fragment; that is
/// [`ClientError::NotADashboard`].
pub async fn get_dashboard_entity<E: QueryExecutor>(
    executor: &E,
    guid: &str,
) -> Result<Option<DashboardEntity>> {
    let request = GraphQlRequest::new(DASHBOARD_ENTITY_QUERY)
        .with_operation_name("DashboardEntity")
        .with_variables(json!({ "guid": guid }));

    let data: EntityData = executor.execute(request).await?.into_data()?;
    let Some(entity) = data.actor.entity else {
        return Ok(None);
    };

    if entity.get("name").is_none_or(Value::is_null) {
        return Err(ClientError::NotADashboard {
            guid: guid.to_string(),
        });
    }

    serde_json::from_value(entity).map(Some).map_err(|e| {
        ClientError::InvalidResponse(format!("Unexpected dashboard entity shape: {e}"))
    })
}

/// Find the guids of dashboards named exactly `name` in `account_id`.
pub async fn search_dashboard_guids<E: QueryExecutor>(
    executor: &E,
    account_id: AccountId,
    name: &str,
) -> Result<Vec<String>> {
    let request = GraphQlRequest::new(DASHBOARD_SEARCH_QUERY)
        .with_operation_name("DashboardSearch")
        .with_variables(json!({ "query": dashboard_search_filter(account_id, name) }));

    let data: SearchData = executor.execute(request).await?.into_data()?;
    Ok(data
        .actor
        .entity_search
        .results
        .entities
        .into_iter()
        .map(|hit| hit.guid)
        .collect())
}

/// Build the entity-search filter for a dashboard name in one account.
///
/// Backslashes and single quotes in `name` are escaped so the value stays a
/// single quoted literal.
pub fn dashboard_search_filter(account_id: AccountId, name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!("name = '{escaped}' AND tags.accountId = '{account_id}' AND type IN ('DASHBOARD')")
}
