//! Operation definitions for the JobBoard GraphQL API.
//!
//! This module holds the static shapes of the four supported operations and
//! the shared `JobDetails` fragment. The fragment text exists exactly once:
//! both the single-job query and the create mutation splice it in, so the
//! object returned by a create is structurally identical to the object a
//! later read returns. That identity is what makes the post-create cache
//! write ([`create_job_cache_writes`]) valid.

use crate::cache::{CacheKey, CacheWrite};

/// Whether an operation reads or writes server state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    /// A read-only operation.
    Query,
    /// A state-changing operation.
    Mutation,
}

/// A named, statically defined GraphQL operation.
///
/// Operations are read-only templates: the document is fixed at definition
/// time and never mutated at runtime. The name doubles as the cache key
/// namespace (see [`CacheKey`]).
#[derive(Clone, Debug)]
pub struct Operation {
    /// Whether this is a query or a mutation.
    pub kind: OperationKind,
    /// The operation name, matching the name in the document.
    pub name: &'static str,
    /// The full GraphQL document, fragments included.
    pub document: String,
}

/// Operation name for the company query.
pub const QUERY_COMPANY: &str = "QueryCompany";
/// Operation name for the single-job query.
pub const QUERY_JOB: &str = "QueryJob";
/// Operation name for the job-list query.
pub const QUERY_JOBS: &str = "QueryJobs";
/// Operation name for the create-job mutation.
pub const CREATE_JOB: &str = "CreateJob";

/// The shared job-details fragment.
///
/// Spliced into both [`job_query`] and [`create_job_mutation`]; defined
/// once so the two selections cannot drift apart.
pub const JOB_DETAILS_FRAGMENT: &str = "\
fragment JobDetails on Job {
  id
  title
  company {
    id
    name
  }
  description
}";

const COMPANY_QUERY_DOCUMENT: &str = "\
query QueryCompany($id: ID!) {
  company(id: $id) {
    id
    name
    description
    jobs {
      id
      title
    }
  }
}";

const JOB_QUERY_BODY: &str = "\
query QueryJob($id: ID!) {
  job(id: $id) {
    ...JobDetails
  }
}";

const JOBS_QUERY_DOCUMENT: &str = "\
query QueryJobs {
  jobs {
    id
    title
    company {
      id
      name
    }
  }
}";

const CREATE_JOB_MUTATION_BODY: &str = "\
mutation CreateJob($input: CreateJobInput) {
  job: createJob(input: $input) {
    ...JobDetails
  }
}";

/// The company query: `{id}` → `{company {id name description jobs {id title}}}`.
#[must_use]
pub fn company_query() -> Operation {
    Operation {
        kind: OperationKind::Query,
        name: QUERY_COMPANY,
        document: COMPANY_QUERY_DOCUMENT.to_string(),
    }
}

/// The single-job query: `{id}` → `{job {...JobDetails}}`.
#[must_use]
pub fn job_query() -> Operation {
    Operation {
        kind: OperationKind::Query,
        name: QUERY_JOB,
        document: format!("{JOB_QUERY_BODY}\n{JOB_DETAILS_FRAGMENT}"),
    }
}

/// The job-list query: no variables → `{jobs {id title company {id name}}}`.
#[must_use]
pub fn jobs_query() -> Operation {
    Operation {
        kind: OperationKind::Query,
        name: QUERY_JOBS,
        document: JOBS_QUERY_DOCUMENT.to_string(),
    }
}

/// The create-job mutation: `{input}` → `{job: createJob(input: $input) {...JobDetails}}`.
///
/// The `job:` alias gives the mutation's response data the same top-level
/// field name as [`job_query`]'s.
#[must_use]
pub fn create_job_mutation() -> Operation {
    Operation {
        kind: OperationKind::Mutation,
        name: CREATE_JOB,
        document: format!("{CREATE_JOB_MUTATION_BODY}\n{JOB_DETAILS_FRAGMENT}"),
    }
}

/// The cache writes a successful [`create_job_mutation`] implies.
///
/// A caller that creates a job and immediately navigates to "view job"
/// should not issue a redundant fetch, or worse, see a transient not-found
/// while the write propagates. The created job is therefore stored under
/// the exact key `load_job(id)` will use: operation [`QUERY_JOB`], variables
/// `{"id": <created id>}`. The stored value is the data object the job
/// query would have returned (`{"job": <job details>}`), not the raw
/// mutation envelope.
///
/// Returns no writes when the response data carries no job id; the caller's
/// own response handling surfaces that as a malformed response.
#[must_use]
pub fn create_job_cache_writes(data: &serde_json::Value) -> Vec<CacheWrite> {
    let Some(job) = data.get("job") else {
        return Vec::new();
    };
    let Some(id) = job.get("id").and_then(serde_json::Value::as_str) else {
        return Vec::new();
    };

    vec![CacheWrite {
        key: CacheKey::new(QUERY_JOB, &serde_json::json!({ "id": id })),
        data: serde_json::json!({ "job": job.clone() }),
    }]
}
