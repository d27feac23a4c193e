//! Transport error types for the JobBoard API SDK.
//!
//! This module contains the single error kind surfaced by the request path.
//!
//! # Error Handling
//!
//! Every request operation propagates [`TransportError`] unchanged to its
//! caller. There is no local recovery, no retry, and no default value
//! substitution: a failure is never silently swallowed. The variants
//! distinguish where in the round trip the failure occurred:
//!
//! - [`TransportError::Network`]: the HTTP call itself failed
//! - [`TransportError::Response`]: the server answered with a non-2xx status
//! - [`TransportError::Operation`]: the server reported GraphQL operation errors
//! - [`TransportError::MalformedResponse`]: the response envelope did not
//!   have the expected shape
//!
//! # Example
//!
//! ```rust,ignore
//! use jobboard_api::TransportError;
//!
//! match client.load_job("42").await {
//!     Ok(job) => println!("Found: {}", job.title),
//!     Err(TransportError::Operation { message }) => {
//!         println!("Server rejected the operation: {message}");
//!     }
//!     Err(other) => println!("Request failed: {other}"),
//! }
//! ```

use thiserror::Error;

/// Error type for the request path.
///
/// This is the one failure kind every facade operation returns, covering
/// network failure and server-reported operation errors.
///
/// # Example
///
/// ```rust
/// use jobboard_api::TransportError;
///
/// let error = TransportError::Response {
///     code: 401,
///     message: r#"{"error":"Unauthorized"}"#.to_string(),
/// };
/// assert!(error.to_string().contains("Unauthorized"));
/// ```
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-successful HTTP status.
    #[error("Request failed with status {code}: {message}")]
    Response {
        /// The HTTP status code of the response.
        code: u16,
        /// Serialized error message from the response body.
        message: String,
    },

    /// The server reported GraphQL operation errors alongside HTTP 200.
    #[error("GraphQL operation failed: {message}")]
    Operation {
        /// The server's error messages, joined.
        message: String,
    },

    /// The response did not carry the expected envelope or field shape.
    #[error("Malformed response: {reason}")]
    MalformedResponse {
        /// What was missing or mismatched.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_includes_status_and_message() {
        let error = TransportError::Response {
            code: 404,
            message: r#"{"error":"Not Found"}"#.to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("Not Found"));
    }

    #[test]
    fn test_operation_error_includes_server_messages() {
        let error = TransportError::Operation {
            message: "Job not found; Access denied".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("GraphQL operation failed"));
        assert!(message.contains("Job not found"));
    }

    #[test]
    fn test_malformed_response_error_names_the_reason() {
        let error = TransportError::MalformedResponse {
            reason: "missing 'data' object".to_string(),
        };
        assert!(error.to_string().contains("missing 'data' object"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &TransportError::Operation {
            message: "test".to_string(),
        };
        let _ = error;
    }
}
