//! # JobBoard API Rust SDK
//!
//! A Rust client SDK for a job-board GraphQL API, providing typed
//! operations, session-aware authorization, and a query cache that keeps a
//! freshly created job consistent with subsequent reads.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`JobBoardConfig`] and [`JobBoardConfigBuilder`]
//! - A validated [`EndpointUrl`] newtype for the GraphQL endpoint
//! - Session handling via [`SessionProvider`], [`Session`], and [`Anonymous`]
//! - Four typed async operations on [`JobBoardClient`]: create a job, load a
//!   company, load a job, load the job list
//! - A shared `JobDetails` fragment guaranteeing the create result and the
//!   single-job read have identical shape
//! - Cache pre-population after a create, so the new job is readable without
//!   another network round trip
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use jobboard_api::{Anonymous, EndpointUrl, JobBoardClient, JobBoardConfig};
//!
//! // Create configuration using the builder pattern
//! let config = JobBoardConfig::builder()
//!     .endpoint(EndpointUrl::new("http://localhost:9000/graphql").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // Anonymous access: reads work without a session
//! let client = JobBoardClient::new(&config, Arc::new(Anonymous));
//! ```
//!
//! ## Authenticated Requests
//!
//! Access tokens are obtained outside this SDK (e.g., from a login
//! endpoint) and handed to a [`Session`]. The HTTP layer consults the
//! session provider on every request and attaches
//! `Authorization: Bearer <token>` only while a session exists:
//!
//! ```rust
//! use std::sync::Arc;
//! use jobboard_api::{EndpointUrl, JobBoardClient, JobBoardConfig, Session};
//!
//! let config = JobBoardConfig::builder()
//!     .endpoint(EndpointUrl::new("http://localhost:9000/graphql").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let session = Arc::new(Session::new(
//!     "session-id".to_string(),
//!     "access-token".to_string(),
//!     None, // no expiration
//! ));
//!
//! let client = JobBoardClient::new(&config, session);
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use jobboard_api::CreateJobInput;
//!
//! // One awaited round trip each; errors propagate unchanged
//! let companies = client.load_company("7").await?;
//! let jobs = client.load_jobs().await?; // always a fresh fetch
//!
//! let job = client
//!     .create_job(CreateJobInput::new("Engineer", "Build things"))
//!     .await?;
//!
//! // Served from the cache the create pre-populated
//! let same = client.load_job(&job.id).await?;
//! assert_eq!(job, same);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: The client is explicitly constructed and passed by
//!   reference; configuration is instance-based
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No silent failures**: Every operation propagates [`TransportError`]
//!   unchanged; there are no retries and no default-value substitution

pub mod auth;
pub mod cache;
pub mod clients;
pub mod config;
pub mod error;
pub mod requests;

// Re-export public types at crate root for convenience
pub use auth::{Anonymous, Session, SessionProvider};
pub use cache::{CacheKey, CacheWrite, FetchPolicy, QueryCache};
pub use config::{EndpointUrl, JobBoardConfig, JobBoardConfigBuilder};
pub use error::ConfigError;

// Re-export client types
pub use clients::{GraphqlClient, HttpClient, HttpResponse, TransportError};

// Re-export the request facade and its models
pub use requests::{
    Company, CompanyRef, CreateJobInput, Job, JobBoardClient, JobListing, JobSummary,
};
