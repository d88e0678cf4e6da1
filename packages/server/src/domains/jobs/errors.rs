use job_contract::ValidationError;
use thiserror::Error;

use crate::common::JobId;

/// Failures surfaced by job queries.
#[derive(Error, Debug)]
pub enum JobError {
    /// Malformed request; rejected before touching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("job not found: {0}")]
    NotFound(JobId),

    /// The record store failed or could not be reached. Not retried here.
    #[error("record store unavailable: {0:#}")]
    Unavailable(anyhow::Error),
}

impl JobError {
    pub fn unavailable(error: anyhow::Error) -> Self {
        JobError::Unavailable(error)
    }
}
