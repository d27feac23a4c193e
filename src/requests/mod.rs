//! The request facade for the JobBoard API.
//!
//! This module exposes [`JobBoardClient`], the typed entry point tying the
//! operation definitions, the transport, and the query cache together. Each
//! operation is one awaited network round trip with no retries and no
//! internal state beyond the cache.
//!
//! # Overview
//!
//! - [`JobBoardClient::create_job`]: create a job, pre-populating the cache
//!   so the created job is immediately readable
//! - [`JobBoardClient::load_company`]: load a company with its jobs
//! - [`JobBoardClient::load_job`]: load a single job (cache-first)
//! - [`JobBoardClient::load_jobs`]: load the job list (always a fresh fetch)
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jobboard_api::{CreateJobInput, EndpointUrl, JobBoardClient, JobBoardConfig, Session};
//!
//! let config = JobBoardConfig::builder()
//!     .endpoint(EndpointUrl::new("http://localhost:9000/graphql").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let session = Arc::new(Session::new("id".to_string(), "token".to_string(), None));
//! let client = JobBoardClient::new(&config, session);
//!
//! let job = client
//!     .create_job(CreateJobInput::new("Engineer", "Build things"))
//!     .await?;
//!
//! // Served from the cache, no second round trip
//! let same = client.load_job(&job.id).await?;
//! assert_eq!(job, same);
//! ```

pub mod models;

pub use models::{Company, CompanyRef, CreateJobInput, Job, JobListing, JobSummary};

use std::sync::Arc;

use crate::auth::SessionProvider;
use crate::cache::{CacheKey, FetchPolicy, QueryCache};
use crate::clients::graphql::operations::{
    company_query, create_job_cache_writes, create_job_mutation, job_query, jobs_query, Operation,
};
use crate::clients::{GraphqlClient, TransportError};
use crate::config::JobBoardConfig;

/// The typed client for the JobBoard API.
///
/// Explicitly constructed from a [`JobBoardConfig`] and a session provider;
/// there is no module-level singleton. Pass the client by reference to
/// whatever needs it.
///
/// # Thread Safety
///
/// `JobBoardClient` is `Send + Sync`; clones of an `Arc<JobBoardClient>`
/// share one cache.
///
/// # Concurrency
///
/// Calls are independent: the client does not de-duplicate in-flight
/// identical requests, so two simultaneous `load_job` calls for the same id
/// each trigger their own round trip unless the cache serves the second
/// before the first resolves. No cancellation or timeout exists at this
/// layer.
#[derive(Debug)]
pub struct JobBoardClient {
    graphql: GraphqlClient,
    cache: QueryCache,
}

// Verify JobBoardClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<JobBoardClient>();
};

impl JobBoardClient {
    /// Creates a new client for the given configuration and session.
    #[must_use]
    pub fn new(config: &JobBoardConfig, session: Arc<dyn SessionProvider>) -> Self {
        Self {
            graphql: GraphqlClient::new(config, session),
            cache: QueryCache::new(),
        }
    }

    /// Returns the query cache.
    ///
    /// Callers clear it on logout, where cached responses may belong to the
    /// previous session.
    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Creates a job and returns it with its server-assigned id.
    ///
    /// On success, the created job is written into the cache under the
    /// exact key [`load_job`](Self::load_job) will use, so a caller that
    /// creates a job and immediately views it is served without another
    /// network round trip.
    ///
    /// # Errors
    ///
    /// Propagates [`TransportError`] unchanged; does not roll back or retry.
    pub async fn create_job(&self, input: CreateJobInput) -> Result<Job, TransportError> {
        let operation = create_job_mutation();
        let variables = serde_json::json!({ "input": input });

        let data = self.graphql.send(&operation, Some(variables)).await?;
        let job: Job = extract_field(&data, "job", operation.name)?;

        for write in create_job_cache_writes(&data) {
            self.cache.apply(write);
        }

        Ok(job)
    }

    /// Loads a company with its jobs.
    ///
    /// # Errors
    ///
    /// Propagates [`TransportError`] unchanged.
    pub async fn load_company(&self, id: &str) -> Result<Company, TransportError> {
        let operation = company_query();
        let variables = serde_json::json!({ "id": id });

        let data = self
            .run_query(&operation, Some(variables), FetchPolicy::CacheFirst)
            .await?;
        extract_field(&data, "company", operation.name)
    }

    /// Loads a single job.
    ///
    /// Served from the cache when a previous fetch or a
    /// [`create_job`](Self::create_job) pre-populated it.
    ///
    /// # Errors
    ///
    /// Propagates [`TransportError`] unchanged.
    pub async fn load_job(&self, id: &str) -> Result<Job, TransportError> {
        let operation = job_query();
        let variables = serde_json::json!({ "id": id });

        let data = self
            .run_query(&operation, Some(variables), FetchPolicy::CacheFirst)
            .await?;
        extract_field(&data, "job", operation.name)
    }

    /// Loads the list of all jobs.
    ///
    /// Always issues a fresh network fetch: list membership changes over
    /// time and no invalidation protocol exists to keep a cached list
    /// consistent with writes, so this operation never reads or writes the
    /// cache.
    ///
    /// # Errors
    ///
    /// Propagates [`TransportError`] unchanged.
    pub async fn load_jobs(&self) -> Result<Vec<JobListing>, TransportError> {
        let operation = jobs_query();

        let data = self
            .run_query(&operation, None, FetchPolicy::NoCache)
            .await?;
        extract_field(&data, "jobs", operation.name)
    }

    /// Runs a query under the given fetch policy.
    async fn run_query(
        &self,
        operation: &Operation,
        variables: Option<serde_json::Value>,
        policy: FetchPolicy,
    ) -> Result<serde_json::Value, TransportError> {
        let key = CacheKey::new(
            operation.name,
            variables.as_ref().unwrap_or(&serde_json::Value::Null),
        );

        if policy == FetchPolicy::CacheFirst {
            if let Some(data) = self.cache.read(&key) {
                tracing::debug!(operation = operation.name, "serving from cache");
                return Ok(data);
            }
        }

        let data = self.graphql.send(operation, variables).await?;

        if policy == FetchPolicy::CacheFirst {
            self.cache.write(key, data.clone());
        }

        Ok(data)
    }
}

/// Unwraps one field of a response's `data` object into a typed value.
fn extract_field<T>(
    data: &serde_json::Value,
    field: &str,
    operation: &'static str,
) -> Result<T, TransportError>
where
    T: serde::de::DeserializeOwned,
{
    let value = data
        .get(field)
        .filter(|v| !v.is_null())
        .ok_or_else(|| TransportError::MalformedResponse {
            reason: format!("response to '{operation}' carried no '{field}' field"),
        })?;

    serde_json::from_value(value.clone()).map_err(|e| TransportError::MalformedResponse {
        reason: format!("field '{field}' of '{operation}' did not match the expected shape: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Anonymous;
    use crate::config::EndpointUrl;
    use serde_json::json;

    fn create_test_client() -> JobBoardClient {
        // Port 9 (discard) is not running a server, so any network fetch
        // in these tests fails fast instead of hanging
        let config = JobBoardConfig::builder()
            .endpoint(EndpointUrl::new("http://127.0.0.1:9/graphql").unwrap())
            .build()
            .unwrap();
        JobBoardClient::new(&config, Arc::new(Anonymous))
    }

    #[test]
    fn test_client_starts_with_empty_cache() {
        let client = create_test_client();
        assert!(client.cache().is_empty());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JobBoardClient>();
    }

    #[test]
    fn test_extract_field_returns_typed_value() {
        let data = json!({
            "job": {
                "id": "42",
                "title": "Engineer",
                "company": { "id": "7", "name": "Acme" },
                "description": "Build things"
            }
        });

        let job: Job = extract_field(&data, "job", "QueryJob").unwrap();
        assert_eq!(job.id, "42");
    }

    #[test]
    fn test_extract_field_rejects_missing_field() {
        let data = json!({ "company": { "id": "7" } });

        let result: Result<Job, _> = extract_field(&data, "job", "QueryJob");
        assert!(matches!(
            result,
            Err(TransportError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_extract_field_rejects_null_field() {
        let data = json!({ "job": null });

        let result: Result<Job, _> = extract_field(&data, "job", "QueryJob");
        assert!(matches!(
            result,
            Err(TransportError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_extract_field_rejects_shape_mismatch() {
        let data = json!({ "job": { "id": 42 } });

        let result: Result<Job, _> = extract_field(&data, "job", "QueryJob");
        assert!(matches!(
            result,
            Err(TransportError::MalformedResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_cached_job_is_served_without_network() {
        // Pre-populate the cache the way create_job does, then load with no
        // reachable server: the read must still succeed
        let client = create_test_client();
        let job_data = json!({
            "job": {
                "id": "42",
                "title": "Engineer",
                "company": { "id": "7", "name": "Acme" },
                "description": "Build things"
            }
        });

        for write in create_job_cache_writes(&job_data) {
            client.cache().apply(write);
        }

        let job = client.load_job("42").await.unwrap();
        assert_eq!(job.id, "42");
        assert_eq!(job.title, "Engineer");
    }

    #[tokio::test]
    async fn test_load_jobs_never_reads_cache() {
        // Even a pre-populated list entry must not be served: the list is
        // always a fresh fetch, and with no reachable server that fails
        let client = create_test_client();
        client.cache().write(
            CacheKey::new("QueryJobs", &serde_json::Value::Null),
            json!({ "jobs": [] }),
        );

        let result = client.load_jobs().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_job_with_unknown_id_misses_cache() {
        let client = create_test_client();
        let job_data = json!({
            "job": {
                "id": "42",
                "title": "Engineer",
                "company": { "id": "7", "name": "Acme" },
                "description": null
            }
        });
        for write in create_job_cache_writes(&job_data) {
            client.cache().apply(write);
        }

        // Different id: cache miss, then network failure
        let result = client.load_job("43").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_cache_clear_forces_network_fetch() {
        let client = create_test_client();
        let job_data = json!({
            "job": {
                "id": "42",
                "title": "Engineer",
                "company": { "id": "7", "name": "Acme" },
                "description": null
            }
        });
        for write in create_job_cache_writes(&job_data) {
            client.cache().apply(write);
        }
        client.cache().clear();

        let result = client.load_job("42").await;
        assert!(result.is_err());
    }
}
