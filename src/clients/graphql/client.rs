//! GraphQL client implementation for the JobBoard API.
//!
//! This module provides the [`GraphqlClient`] type for executing the SDK's
//! operation definitions against the configured endpoint.

use std::sync::Arc;

use crate::auth::SessionProvider;
use crate::clients::graphql::operations::Operation;
use crate::clients::{HttpClient, TransportError};
use crate::config::JobBoardConfig;

/// GraphQL client for the JobBoard API.
///
/// Sends an [`Operation`] plus variables as a standard GraphQL POST body,
/// unwraps the `{data, errors}` response envelope, and returns the `data`
/// object. Server-reported operation errors fail the whole call: there is
/// no partial-result handling.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use jobboard_api::{Anonymous, EndpointUrl, GraphqlClient, JobBoardConfig};
/// use jobboard_api::clients::graphql::operations::job_query;
/// use serde_json::json;
///
/// let config = JobBoardConfig::builder()
///     .endpoint(EndpointUrl::new("http://localhost:9000/graphql").unwrap())
///     .build()
///     .unwrap();
///
/// let client = GraphqlClient::new(&config, Arc::new(Anonymous));
///
/// let data = client.send(&job_query(), Some(json!({ "id": "42" }))).await?;
/// println!("Job title: {}", data["job"]["title"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given configuration and session.
    ///
    /// The constructor is infallible: the endpoint was already validated
    /// when the configuration was built.
    #[must_use]
    pub fn new(config: &JobBoardConfig, session: Arc<dyn SessionProvider>) -> Self {
        Self {
            http_client: HttpClient::new(config, session),
        }
    }

    /// Returns the endpoint URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Executes an operation and returns the response's `data` object.
    ///
    /// The request body is the standard GraphQL JSON envelope:
    /// `{"query": <document>, "variables": <variables>}`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] or [`TransportError::Response`]
    /// for HTTP-level failures, [`TransportError::Operation`] when the body
    /// carries a non-empty `errors` array (the server reports these with
    /// HTTP 200), and [`TransportError::MalformedResponse`] when a
    /// successful response has no `data` object.
    pub async fn send(
        &self,
        operation: &Operation,
        variables: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, TransportError> {
        tracing::debug!(operation = operation.name, "dispatching GraphQL operation");

        let body = serde_json::json!({
            "query": operation.document,
            "variables": variables,
        });

        let response = self.http_client.post(body).await?;

        if let Some(errors) = response.body.get("errors").and_then(|e| e.as_array()) {
            if !errors.is_empty() {
                let message = Self::join_error_messages(errors);
                tracing::warn!(
                    operation = operation.name,
                    %message,
                    "GraphQL operation returned errors"
                );
                return Err(TransportError::Operation { message });
            }
        }

        match response.body.get("data") {
            Some(data) if !data.is_null() => Ok(data.clone()),
            _ => Err(TransportError::MalformedResponse {
                reason: format!("response to '{}' carried no data object", operation.name),
            }),
        }
    }

    /// Joins the `message` fields of a GraphQL errors array.
    fn join_error_messages(errors: &[serde_json::Value]) -> String {
        let messages: Vec<&str> = errors
            .iter()
            .filter_map(|e| e.get("message").and_then(serde_json::Value::as_str))
            .collect();

        if messages.is_empty() {
            // No message fields: fall back to the raw array
            serde_json::to_string(errors).unwrap_or_else(|_| "unknown error".to_string())
        } else {
            messages.join("; ")
        }
    }
}
