//! GraphQL client for the JobBoard API.
//!
//! This module provides the GraphQL transport built on top of the
//! [`HttpClient`](crate::clients::HttpClient), plus the static operation
//! definitions it executes.
//!
//! # Overview
//!
//! The main items in this module are:
//!
//! - [`GraphqlClient`]: executes an operation + variables and unwraps the
//!   response envelope
//! - [`operations`]: the four operation definitions, the shared
//!   `JobDetails` fragment, and the declared post-create cache writes
//!
//! # Response Structure
//!
//! GraphQL responses carry a one-level envelope:
//!
//! - `data`: the operation result, keyed by field name
//! - `errors`: server-reported operation errors (arriving with HTTP 200)
//!
//! The client returns the `data` object of successful responses and turns a
//! non-empty `errors` array into [`TransportError::Operation`](crate::TransportError) —
//! an operation error fails the whole call, there is no partial-result
//! handling.

mod client;
pub mod operations;

pub use client::GraphqlClient;
