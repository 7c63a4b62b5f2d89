//! Dashboard mutations.

use serde::Deserialize;
use serde_json::json;

use crate::error::{ClientError, Result};
use crate::graphql::{GraphQlRequest, QueryExecutor};
use crate::models::{DashboardCreateResult, DashboardEntity};
use nerdgraph_config::AccountId;

/// Create a dashboard in an account.
pub const DASHBOARD_CREATE_MUTATION: &str = r#"mutation DashboardCreate($accountId: Int!, $dashboard: DashboardInput!) {
  dashboardCreate(accountId: $accountId, dashboard: $dashboard) {
    entityResult {
      guid
      name
    }
    errors {
      description
      type
    }
  }
}"#;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateData {
    dashboard_create: Option<DashboardCreateResult>,
}

/// Create `dashboard` in `account_id`.
///
/// Domain errors reported inside the payload are returned as data; callers
/// decide how to surface them. A GraphQL error list is a [`ClientError::GraphQl`].
pub async fn create_dashboard<E: QueryExecutor>(
    executor: &E,
    account_id: AccountId,
    dashboard: &DashboardEntity,
) -> Result<DashboardCreateResult> {
    let input = serde_json::to_value(dashboard).map_err(|e| {
        ClientError::InvalidResponse(format!("Could not encode dashboard input: {e}"))
    })?;
    let request = GraphQlRequest::new(DASHBOARD_CREATE_MUTATION)
        .with_operation_name("DashboardCreate")
        .with_variables(json!({ "accountId": account_id, "dashboard": input }));

    let data: CreateData = executor.execute(request).await?.into_data()?;
    data.dashboard_create.ok_or_else(|| {
        ClientError::InvalidResponse("dashboardCreate payload missing from response".to_string())
    })
}
