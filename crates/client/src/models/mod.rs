//! Data models for NerdGraph responses and inputs.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod dashboards;

pub use dashboards::{
    CreatedDashboard, DashboardCreateError, DashboardCreateResult, DashboardEntity, Page,
    Visualization, Widget, WidgetLayout,
};
