//! Centralized constants for the dashboard migration workspace.
//!
//! Default values shared across crates live here so the CLI, the client
//! and the migration core agree on them.

// =============================================================================
// Endpoint & Identity
// =============================================================================

/// Default NerdGraph endpoint (US datacenter).
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://api.newrelic.com/graphql";

/// Application name used in log lines and the `User-Agent` header.
pub const APP_NAME: &str = "nr-dashboard-utility";

// =============================================================================
// Concurrency
// =============================================================================

/// Default number of in-flight requests for the export phase.
pub const DEFAULT_EXPORT_CONCURRENCY: usize = 4;

/// Default number of in-flight requests for the import phase.
pub const DEFAULT_IMPORT_CONCURRENCY: usize = 4;

/// Upper bound for either pool size. NerdGraph rate limits per user key,
/// so larger pools only trade throughput for rejected requests.
pub const MAX_CONCURRENCY: usize = 25;

// =============================================================================
// Environment Variables
// =============================================================================

/// Fallback user key used when neither side nor the top level sets one.
pub const ENV_USER_KEY: &str = "NEW_RELIC_USER_KEY";

/// Overrides the NerdGraph endpoint (e.g. the EU datacenter).
pub const ENV_GRAPHQL_URL: &str = "NEW_RELIC_GRAPHQL_URL";

/// Disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
