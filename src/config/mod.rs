//! Configuration types for the JobBoard API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for communication with a job-board GraphQL server.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`JobBoardConfig`]: The main configuration struct holding all SDK settings
//! - [`JobBoardConfigBuilder`]: A builder for constructing [`JobBoardConfig`] instances
//! - [`EndpointUrl`]: A validated GraphQL endpoint URL newtype
//!
//! # Example
//!
//! ```rust
//! use jobboard_api::{JobBoardConfig, EndpointUrl};
//!
//! let config = JobBoardConfig::builder()
//!     .endpoint(EndpointUrl::new("http://localhost:9000/graphql").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::EndpointUrl;

use crate::error::ConfigError;

/// Configuration for the JobBoard API SDK.
///
/// This struct holds all configuration needed for SDK operations: the
/// GraphQL endpoint the client talks to and optional HTTP client settings.
/// The endpoint is fixed at build time and is not parameterized per call.
///
/// # Thread Safety
///
/// `JobBoardConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use jobboard_api::{JobBoardConfig, EndpointUrl};
///
/// let config = JobBoardConfig::builder()
///     .endpoint(EndpointUrl::new("https://api.example.com/graphql").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint().as_ref(), "https://api.example.com/graphql");
/// ```
#[derive(Clone, Debug)]
pub struct JobBoardConfig {
    endpoint: EndpointUrl,
    user_agent_prefix: Option<String>,
}

impl JobBoardConfig {
    /// Creates a new builder for constructing a `JobBoardConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jobboard_api::{JobBoardConfig, EndpointUrl};
    ///
    /// let config = JobBoardConfig::builder()
    ///     .endpoint(EndpointUrl::new("http://localhost:9000/graphql").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> JobBoardConfigBuilder {
        JobBoardConfigBuilder::new()
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify JobBoardConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<JobBoardConfig>();
};

/// Builder for constructing [`JobBoardConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. The only
/// required field is `endpoint`.
///
/// # Defaults
///
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use jobboard_api::{JobBoardConfig, EndpointUrl};
///
/// let config = JobBoardConfig::builder()
///     .endpoint(EndpointUrl::new("https://api.example.com/graphql").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct JobBoardConfigBuilder {
    endpoint: Option<EndpointUrl>,
    user_agent_prefix: Option<String>,
}

impl JobBoardConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint URL (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`JobBoardConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` is not set.
    pub fn build(self) -> Result<JobBoardConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;

        Ok(JobBoardConfig {
            endpoint,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
