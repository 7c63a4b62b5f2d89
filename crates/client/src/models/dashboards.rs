//! Dashboard models for the NerdGraph dashboard API.
//!
//! The same types are used to read a dashboard (`actor.entity`) and to
//! create one (`DashboardInput`), so field names follow NerdGraph's camelCase
//! and optional fields are omitted rather than sent as `null`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dashboard entity, as fetched or as about to be created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardEntity {
    /// Present on fetched entities; absent on creation input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// e.g. `PUBLIC_READ_WRITE`, `PUBLIC_READ_ONLY`, `PRIVATE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<Page>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widgets: Option<Vec<Widget>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualization: Option<Visualization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<WidgetLayout>,
    /// Opaque visualization settings; may hold an `nrqlQueries` list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_configuration: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visualization {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetLayout {
    pub row: u32,
    pub column: u32,
    pub width: u32,
    pub height: u32,
}

/// Identity of a dashboard returned by `dashboardCreate.entityResult`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedDashboard {
    pub guid: String,
    pub name: String,
}

/// A domain-level error reported inside a successful `dashboardCreate` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCreateError {
    pub description: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

/// The `dashboardCreate` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCreateResult {
    #[serde(default)]
    pub entity_result: Option<CreatedDashboard>,
    #[serde(default)]
    pub errors: Option<Vec<DashboardCreateError>>,
}

impl DashboardCreateResult {
    /// The first domain error, if the mutation reported any.
    pub fn first_error(&self) -> Option<&DashboardCreateError> {
        self.errors.as_ref().and_then(|errors| errors.first())
    }
}
