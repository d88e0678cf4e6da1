//! Job query actions
//!
//! All job reads go through these actions. They take an already-validated
//! filter, talk to the store only through [`BaseJobStore`], and return wire
//! shapes.

use job_contract::{JobDetail, JobPage, JobSummary, ValidatedFilter, ValidationError};
use tracing::{debug, info};

use crate::common::{split_lookahead, Cursor, JobId};
use crate::domains::jobs::errors::JobError;
use crate::domains::jobs::filter::JobPredicate;
use crate::kernel::BaseJobStore;

/// Get one page of jobs matching `filter`.
///
/// Asks the store for `limit + 1` rows starting at the cursor. The extra row,
/// when present, becomes the next cursor and is not returned. A cursor naming
/// a job that no longer exists produces an empty, exhausted page.
pub async fn list_jobs(
    filter: &ValidatedFilter,
    store: &dyn BaseJobStore,
) -> Result<JobPage, JobError> {
    let start_at = filter
        .cursor
        .as_deref()
        .map(Cursor::decode)
        .transpose()?
        .map(|cursor| cursor.job_id());

    let predicate = JobPredicate::compile(filter);

    info!(
        title = ?predicate.title_contains,
        location = ?predicate.location_contains,
        job_types = ?predicate.job_type_codes(),
        start_at = ?start_at,
        limit = filter.limit.get(),
        "Listing jobs"
    );

    let rows = store
        .find_many(&predicate, start_at, filter.limit.fetch_limit())
        .await
        .map_err(JobError::unavailable)?;

    let (jobs, lookahead) = split_lookahead(rows, filter.limit);
    let next_cursor = lookahead.map(|job| Cursor::new(job.id).encode());

    debug!(
        returned = jobs.len(),
        has_next = next_cursor.is_some(),
        "Listed jobs"
    );

    Ok(JobPage {
        jobs: jobs.into_iter().map(JobSummary::from).collect(),
        next_cursor,
    })
}

/// Get a single job with its requirements and duties.
pub async fn get_job(job_id: &str, store: &dyn BaseJobStore) -> Result<JobDetail, JobError> {
    let id = JobId::parse(job_id).map_err(|_| ValidationError::InvalidId(job_id.to_string()))?;

    info!(job_id = %id, "Getting job");

    store
        .find_one(id)
        .await
        .map_err(JobError::unavailable)?
        .map(JobDetail::from)
        .ok_or(JobError::NotFound(id))
}
