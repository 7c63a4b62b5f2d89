//! GraphQL request/response types and the transport seam.
//!
//! Responsibilities:
//! - Model a GraphQL request as sent over the wire.
//! - Model a GraphQL response as a discriminated result: data XOR a non-empty error list.
//! - Define [`QueryExecutor`], the only way the rest of the workspace talks to NerdGraph.
//!
//! Does NOT handle:
//! - HTTP transport (see [`crate::client`]).
//! - Domain-specific queries (see [`crate::endpoints`]).
//!
//! Invariants:
//! - A body with a non-empty `errors` array is always [`GraphQlResponse::Errors`],
//!   even if partial `data` is present.
//! - [`GraphQlErrors`] can never be empty, so `first()` is infallible.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// A GraphQL request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Value::Object(Default::default()),
            operation_name: None,
        }
    }

    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Look up a top-level variable by name.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }
}

/// A single GraphQL error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphQlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            extensions: None,
        }
    }
}

/// A non-empty list of GraphQL errors.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQlErrors {
    first: GraphQlError,
    rest: Vec<GraphQlError>,
}

impl GraphQlErrors {
    /// Returns `None` for an empty list.
    pub fn from_vec(errors: Vec<GraphQlError>) -> Option<Self> {
        let mut iter = errors.into_iter();
        let first = iter.next()?;
        Some(Self {
            first,
            rest: iter.collect(),
        })
    }

    pub fn first(&self) -> &GraphQlError {
        &self.first
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &GraphQlError> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn into_vec(self) -> Vec<GraphQlError> {
        let mut all = Vec::with_capacity(1 + self.rest.len());
        all.push(self.first);
        all.extend(self.rest);
        all
    }
}

impl From<GraphQlError> for GraphQlErrors {
    fn from(error: GraphQlError) -> Self {
        Self {
            first: error,
            rest: Vec::new(),
        }
    }
}

/// The outcome of a GraphQL call that reached the server and got a 2xx back.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphQlResponse {
    Data(Value),
    Errors(GraphQlErrors),
}

#[derive(Deserialize)]
struct RawBody {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

impl GraphQlResponse {
    /// Classify a decoded response body.
    pub fn from_body(body: Value) -> Result<Self> {
        let raw: RawBody = serde_json::from_value(body).map_err(|e| {
            ClientError::InvalidResponse(format!("Malformed GraphQL response: {e}"))
        })?;

        if let Some(errors) = raw.errors.and_then(GraphQlErrors::from_vec) {
            return Ok(Self::Errors(errors));
        }

        Ok(Self::Data(raw.data.unwrap_or(Value::Null)))
    }

    /// Shorthand for a response carrying a single error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Errors(GraphQlError::new(message).into())
    }

    /// Decode the `data` payload, turning an error list into [`ClientError::GraphQl`].
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Self::Data(value) => serde_json::from_value(value).map_err(|e| {
                ClientError::InvalidResponse(format!("Unexpected GraphQL data shape: {e}"))
            }),
            Self::Errors(errors) => Err(ClientError::GraphQl {
                message: errors.first().message.clone(),
                errors: errors.into_vec(),
            }),
        }
    }
}

/// Executes GraphQL requests against NerdGraph (or a stand-in).
///
/// Transport failures (non-2xx, connection errors) are `Err`; anything the
/// server answered is `Ok`, including GraphQL error lists.
pub trait QueryExecutor: Send + Sync {
    fn execute(
        &self,
        request: GraphQlRequest,
    ) -> impl Future<Output = Result<GraphQlResponse>> + Send;
}
