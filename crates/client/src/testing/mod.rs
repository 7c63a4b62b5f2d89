//! Testing utilities for NerdGraph client consumers.
//!
//! This module provides a scripted [`QueryExecutor`] that stands in for
//! NerdGraph, plus helpers for loading JSON fixtures and building the
//! response payloads the dashboard endpoints expect.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use nerdgraph_client::testing::{Reply, Rule, ScriptedExecutor, entity_data};
//! use serde_json::json;
//!
//! let executor = ScriptedExecutor::new().with_rule(
//!     Rule::operation("DashboardEntity")
//!         .with_variable("/guid", "abc")
//!         .reply(Reply::data(entity_data(json!({ "guid": "abc", "name": "A" }))))
//!         .after(Duration::from_millis(50)),
//! );
//! ```
//!
//! # Invariants
//! - Rules are matched in insertion order; the first match wins.
//! - A request no rule matches gets a GraphQL error naming its operation,
//!   so a missing script shows up as a per-item failure rather than a hang.
//! - Every request is logged before its delay starts.

use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde_json::{Value, json};

use crate::error::{ClientError, Result};
use crate::graphql::{GraphQlError, GraphQlErrors, GraphQlRequest, GraphQlResponse, QueryExecutor};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "dashboards/entity.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// `data` payload of a `DashboardEntity` query answering with `entity`.
pub fn entity_data(entity: Value) -> Value {
    json!({ "actor": { "entity": entity } })
}

/// `data` payload of a `DashboardSearch` query matching `guids`.
pub fn search_data(guids: &[&str]) -> Value {
    let entities: Vec<Value> = guids.iter().map(|guid| json!({ "guid": guid })).collect();
    json!({ "actor": { "entitySearch": { "results": { "entities": entities } } } })
}

/// `data` payload of a successful `DashboardCreate` mutation.
pub fn created_data(guid: &str, name: &str) -> Value {
    json!({
        "dashboardCreate": {
            "entityResult": { "guid": guid, "name": name },
            "errors": null
        }
    })
}

/// `data` payload of a `DashboardCreate` mutation that reported domain errors.
pub fn create_errors_data(descriptions: &[&str]) -> Value {
    let errors: Vec<Value> = descriptions
        .iter()
        .map(|description| json!({ "description": description, "type": "INVALID_INPUT" }))
        .collect();
    json!({ "dashboardCreate": { "entityResult": null, "errors": errors } })
}

/// What a matched rule answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    Data(Value),
    Errors(Vec<String>),
    /// A transport-level failure, surfaced as [`ClientError::ApiError`].
    Status { status: u16, message: String },
}

impl Reply {
    pub fn data(data: Value) -> Self {
        Self::Data(data)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Errors(vec![message.into()])
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    fn produce(&self) -> Result<GraphQlResponse> {
        match self {
            Self::Data(data) => Ok(GraphQlResponse::Data(data.clone())),
            Self::Errors(messages) => {
                let errors = messages.iter().map(GraphQlError::new).collect();
                Ok(GraphQlErrors::from_vec(errors)
                    .map(GraphQlResponse::Errors)
                    .unwrap_or_else(|| GraphQlResponse::error("empty scripted error list")))
            }
            Self::Status { status, message } => Err(ClientError::ApiError {
                status: *status,
                url: "scripted://nerdgraph".to_string(),
                message: message.clone(),
            }),
        }
    }
}

/// Matches requests by operation name and variable values.
#[derive(Debug, Clone)]
pub struct Rule {
    operation: String,
    variables: Vec<(String, Value)>,
    reply: Reply,
    delay: Duration,
}

impl Rule {
    /// Start a rule for requests with this `operationName`.
    pub fn operation(name: impl Into<String>) -> Self {
        Self {
            operation: name.into(),
            variables: Vec::new(),
            reply: Reply::error("scripted rule has no reply"),
            delay: Duration::ZERO,
        }
    }

    /// Require the variable at a JSON pointer (e.g. `/dashboard/name`) to equal `value`.
    pub fn with_variable(mut self, pointer: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.push((pointer.into(), value.into()));
        self
    }

    pub fn reply(mut self, reply: Reply) -> Self {
        self.reply = reply;
        self
    }

    /// Hold the response back for `delay` (tokio time, so paused clocks apply).
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn matches(&self, request: &GraphQlRequest) -> bool {
        request.operation_name.as_deref() == Some(self.operation.as_str())
            && self
                .variables
                .iter()
                .all(|(pointer, value)| request.variables.pointer(pointer) == Some(value))
    }
}

/// A rule-driven stand-in for NerdGraph.
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    rules: Vec<Rule>,
    log: Mutex<Vec<GraphQlRequest>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<GraphQlRequest> {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Requests received for one operation, in arrival order.
    pub fn requests_for(&self, operation: &str) -> Vec<GraphQlRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.operation_name.as_deref() == Some(operation))
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.log.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Highest number of requests that were awaiting a reply at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    fn find(&self, request: &GraphQlRequest) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(request))
    }
}

impl QueryExecutor for ScriptedExecutor {
    async fn execute(&self, request: GraphQlRequest) -> Result<GraphQlResponse> {
        let rule = self.find(&request).cloned();
        let operation = request
            .operation_name
            .clone()
            .unwrap_or_else(|| "<anonymous>".to_string());
        self.log
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        let result = match rule {
            Some(rule) => {
                if !rule.delay.is_zero() {
                    tokio::time::sleep(rule.delay).await;
                }
                rule.reply.produce()
            }
            None => Ok(GraphQlResponse::error(format!(
                "no scripted response for {operation}"
            ))),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
