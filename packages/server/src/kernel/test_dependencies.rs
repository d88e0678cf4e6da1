// TestDependencies - in-memory implementations for testing
//
// InMemoryJobStore evaluates the same predicate and ordering as the Postgres
// store, entirely in process. Tests use it behind the router; it can also
// be told to fail to exercise the unavailable path.

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use job_contract::NewJob;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

use crate::common::JobId;
use crate::domains::jobs::filter::JobPredicate;
use crate::domains::jobs::models::{Job, JobWithSections};
use crate::kernel::BaseJobStore;

// =============================================================================
// In-memory Job Store
// =============================================================================

#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: RwLock<Vec<JobWithSections>>,
    unavailable: AtomicBool,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a job built from `input`, the way the write path would.
    pub fn insert(&self, input: NewJob) -> JobWithSections {
        let record = JobWithSections {
            job: Job {
                id: JobId::new(),
                company: input.company,
                company_url: input.company_url,
                apply_url: input.apply_url,
                logo_url: input.logo_url,
                logo_bg_color: input.logo_bg_color,
                job_title: input.job_title,
                job_type: input.job_type.code().to_string(),
                location: input.location,
                description: input.description,
                salary: input.salary,
                requirements_id: Uuid::now_v7(),
                duties_id: Uuid::now_v7(),
                created_at: input.created_at.unwrap_or_else(Utc::now),
            },
            requirements: input.requirements,
            duties: input.duties,
        };
        self.insert_record(record.clone());
        record
    }

    /// Insert a fully-formed record as-is (e.g. one with a foreign job-type
    /// code or a chosen id).
    pub fn insert_record(&self, record: JobWithSections) {
        self.jobs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    /// Make every subsequent call fail until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.jobs.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            bail!("in-memory job store is marked unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl BaseJobStore for InMemoryJobStore {
    async fn find_many(
        &self,
        predicate: &JobPredicate,
        start_at: Option<JobId>,
        take: i64,
    ) -> Result<Vec<Job>> {
        self.check_available()?;

        let records = self.jobs.read().unwrap_or_else(PoisonError::into_inner);
        let mut ordered: Vec<&Job> = records.iter().map(|record| &record.job).collect();
        ordered.sort_by(|a, b| Job::newest_first(a, b));

        let start = match start_at {
            Some(id) => match ordered.iter().position(|job| job.id == id) {
                Some(index) => index,
                None => return Ok(Vec::new()),
            },
            None => 0,
        };

        Ok(ordered[start..]
            .iter()
            .filter(|job| predicate.matches(job))
            .take(take.max(0) as usize)
            .map(|job| Job::clone(job))
            .collect())
    }

    async fn find_one(&self, id: JobId) -> Result<Option<JobWithSections>> {
        self.check_available()?;

        let records = self.jobs.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records.iter().find(|record| record.job.id == id).cloned())
    }

    async fn health_check(&self) -> Result<()> {
        self.check_available()
    }
}
