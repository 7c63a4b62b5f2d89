//! NerdGraph query and mutation implementations.
//!
//! Every function is generic over [`crate::QueryExecutor`] so the same code
//! runs against the HTTP client and the scripted test executor.

mod dashboards;
mod entities;

pub use dashboards::{DASHBOARD_CREATE_MUTATION, create_dashboard};
pub use entities::{
    DASHBOARD_ENTITY_QUERY, DASHBOARD_SEARCH_QUERY, dashboard_search_filter, get_dashboard_entity,
    search_dashboard_guids,
};
