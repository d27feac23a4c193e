//! HTTP client for JobBoard API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! POST requests to the configured GraphQL endpoint.

use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::SessionProvider;
use crate::clients::errors::TransportError;
use crate::config::JobBoardConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the JobBoard API.
///
/// The client handles:
/// - Endpoint configuration from [`JobBoardConfig`]
/// - Default headers including User-Agent and Accept
/// - Per-request bearer authorization from the session provider
/// - Response status checking and JSON body parsing
///
/// The session provider is consulted on every request, not captured at
/// construction: a session that logs in or out during the client's
/// lifetime changes whether subsequent calls carry a credential.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use jobboard_api::{HttpClient, JobBoardConfig, EndpointUrl, Session};
/// use serde_json::json;
///
/// let config = JobBoardConfig::builder()
///     .endpoint(EndpointUrl::new("http://localhost:9000/graphql").unwrap())
///     .build()
///     .unwrap();
///
/// let session = Arc::new(Session::new(
///     "session-id".to_string(),
///     "access-token".to_string(),
///     None,
/// ));
///
/// let client = HttpClient::new(&config, session);
/// let response = client.post(json!({ "query": "{ jobs { id } }" })).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The full endpoint URL requests are posted to.
    endpoint: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Consulted per request for the authorization credential.
    session: Arc<dyn SessionProvider>,
}

/// A parsed response from the endpoint.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The response body parsed as JSON (empty object for empty bodies).
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration and session.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use jobboard_api::{Anonymous, EndpointUrl, JobBoardConfig};
    /// use jobboard_api::clients::HttpClient;
    ///
    /// let config = JobBoardConfig::builder()
    ///     .endpoint(EndpointUrl::new("http://localhost:9000/graphql").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config, Arc::new(Anonymous));
    /// ```
    #[must_use]
    pub fn new(config: &JobBoardConfig, session: Arc<dyn SessionProvider>) -> Self {
        let endpoint = config.endpoint().as_ref().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}JobBoard API Library v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            default_headers,
            session,
        }
    }

    /// Returns the endpoint URL for this client.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a JSON body to the endpoint as a POST request.
    ///
    /// When the session provider reports a logged-in session, the access
    /// token is attached as an `Authorization: Bearer` header; otherwise no
    /// authorization header is sent.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the request could not be sent
    /// or the body could not be read, and [`TransportError::Response`] for
    /// non-2xx responses. The caller is responsible for interpreting the
    /// body of successful responses.
    pub async fn post(&self, body: serde_json::Value) -> Result<HttpResponse, TransportError> {
        let mut req_builder = self.client.post(&self.endpoint).json(&body);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        // Attach the credential only when a session exists
        if self.session.is_logged_in() {
            if let Some(token) = self.session.access_token() {
                req_builder = req_builder.header("Authorization", format!("Bearer {token}"));
            }
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                // Keep non-JSON bodies visible to error reporting
                serde_json::json!({ "raw_body": body_text })
            })
        };

        let response = HttpResponse { code, body };

        if response.is_ok() {
            return Ok(response);
        }

        Err(TransportError::Response {
            code,
            message: Self::serialize_error(&response),
        })
    }

    /// Serializes an error response body to a compact JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(error) = response.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
        }
        if let Some(raw) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Anonymous, Session};
    use crate::config::EndpointUrl;

    fn create_test_config() -> JobBoardConfig {
        JobBoardConfig::builder()
            .endpoint(EndpointUrl::new("http://localhost:9000/graphql").unwrap())
            .build()
            .unwrap()
    }

    fn create_test_session() -> Arc<Session> {
        Arc::new(Session::new(
            "test-session".to_string(),
            "test-access-token".to_string(),
            None,
        ))
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new(&create_test_config(), create_test_session());

        assert_eq!(client.endpoint(), "http://localhost:9000/graphql");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config(), create_test_session());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("JobBoard API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = JobBoardConfig::builder()
            .endpoint(EndpointUrl::new("http://localhost:9000/graphql").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config, create_test_session());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("JobBoard API Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config(), create_test_session());

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_no_authorization_in_default_headers() {
        // The credential is attached per request, never stored in defaults
        let client = HttpClient::new(&create_test_config(), create_test_session());

        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_client_accepts_anonymous_provider() {
        let client = HttpClient::new(&create_test_config(), Arc::new(Anonymous));

        assert_eq!(client.endpoint(), "http://localhost:9000/graphql");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_http_response_is_ok_for_2xx() {
        let response = HttpResponse {
            code: 200,
            body: serde_json::json!({}),
        };
        assert!(response.is_ok());

        let response = HttpResponse {
            code: 404,
            body: serde_json::json!({}),
        };
        assert!(!response.is_ok());
    }

    #[test]
    fn test_serialize_error_includes_errors_field() {
        let response = HttpResponse {
            code: 400,
            body: serde_json::json!({ "errors": [{ "message": "bad request" }] }),
        };

        let message = HttpClient::serialize_error(&response);
        assert!(message.contains("bad request"));
    }
}
