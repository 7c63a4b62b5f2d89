//! NerdGraph GraphQL client.
//!
//! This crate provides a typed client for the parts of the New Relic
//! NerdGraph API needed to copy dashboards between accounts: fetching a
//! dashboard entity, searching dashboards by name, and creating dashboards.
//! All calls go through the [`QueryExecutor`] trait so callers can swap the
//! HTTP client for a scripted stand-in.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod graphql;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::NerdGraphClient;
pub use client::builder::NerdGraphClientBuilder;
pub use error::{ClientError, Result};
pub use graphql::{GraphQlError, GraphQlErrors, GraphQlRequest, GraphQlResponse, QueryExecutor};
pub use models::{
    CreatedDashboard, DashboardCreateError, DashboardCreateResult, DashboardEntity, Page,
    Visualization, Widget, WidgetLayout,
};
