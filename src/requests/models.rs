//! Typed entities for the JobBoard API.
//!
//! These types mirror the wire shapes of the operation definitions in
//! [`operations`](crate::clients::graphql::operations). They are only
//! materialized from server responses; the one client-constructed type is
//! the [`CreateJobInput`] write payload.

use serde::{Deserialize, Serialize};

/// A partial view of a company carried inside a job.
///
/// Jobs reference their owning company with `{id, name}` only; full company
/// detail is available via [`load_company`](crate::JobBoardClient::load_company).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CompanyRef {
    /// Opaque company identifier.
    pub id: String,
    /// Company display name.
    pub name: String,
}

/// A job with full details, matching the `JobDetails` fragment shape.
///
/// Returned by [`load_job`](crate::JobBoardClient::load_job) and
/// [`create_job`](crate::JobBoardClient::create_job); the shared fragment
/// guarantees both return structurally identical objects.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Job {
    /// Opaque job identifier, assigned by the server.
    pub id: String,
    /// Job title.
    pub title: String,
    /// The owning company, as a partial reference.
    pub company: CompanyRef,
    /// Job description. Nullable on the server.
    pub description: Option<String>,
}

/// A job as it appears in the job list, without description.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct JobListing {
    /// Opaque job identifier.
    pub id: String,
    /// Job title.
    pub title: String,
    /// The owning company, as a partial reference.
    pub company: CompanyRef,
}

/// A job as it appears inside a company's job collection.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct JobSummary {
    /// Opaque job identifier.
    pub id: String,
    /// Job title.
    pub title: String,
}

/// A company with its jobs, matching the company query shape.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Company {
    /// Opaque company identifier.
    pub id: String,
    /// Company display name.
    pub name: String,
    /// Company description. Nullable on the server.
    pub description: Option<String>,
    /// The company's jobs, in server-provided order.
    pub jobs: Vec<JobSummary>,
}

/// The write payload for creating a job.
///
/// Carries no identity: the server assigns the id and returns it in the
/// created [`Job`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreateJobInput {
    /// Title of the job to create.
    pub title: String,
    /// Description of the job to create.
    pub description: String,
}

impl CreateJobInput {
    /// Creates a new job payload.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
