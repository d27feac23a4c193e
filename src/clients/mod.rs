//! HTTP and GraphQL client types for JobBoard API communication.
//!
//! This module provides the transport layer for the SDK: a thin
//! authenticated HTTP client and the GraphQL client built on it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: the async HTTP client posting to the configured endpoint
//! - [`HttpResponse`]: a parsed response (status code + JSON body)
//! - [`TransportError`]: the single error kind of the request path
//! - [`graphql::GraphqlClient`]: the GraphQL client executing operation definitions
//!
//! # Authorization
//!
//! The HTTP client consults its [`SessionProvider`](crate::SessionProvider)
//! on every request: a logged-in session gets its access token attached as
//! an `Authorization: Bearer` header, an anonymous one sends no
//! authorization header at all.
//!
//! # Failure Behavior
//!
//! There are no retries, no timeouts, and no default-value substitution at
//! this layer. Network failures, non-2xx statuses, and server-reported
//! operation errors all propagate to the caller as [`TransportError`].

mod errors;
pub mod graphql;
mod http_client;

pub use errors::TransportError;
pub use http_client::{HttpClient, HttpResponse, SDK_VERSION};

// Re-export GraphQL client types at the clients module level
pub use graphql::GraphqlClient;
