//! Postgres implementation of [`BaseJobStore`].
//!
//! Thin wrapper: the SQL lives on the [`Job`] model.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::JobId;
use crate::domains::jobs::filter::JobPredicate;
use crate::domains::jobs::models::{Job, JobWithSections};
use crate::kernel::BaseJobStore;

pub struct PostgresJobStore {
    pool: PgPool,
}

impl PostgresJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BaseJobStore for PostgresJobStore {
    async fn find_many(
        &self,
        predicate: &JobPredicate,
        start_at: Option<JobId>,
        take: i64,
    ) -> Result<Vec<Job>> {
        Job::find_page(predicate, start_at, take, &self.pool).await
    }

    async fn find_one(&self, id: JobId) -> Result<Option<JobWithSections>> {
        Job::find_with_sections(id, &self.pool).await
    }

    async fn health_check(&self) -> Result<()> {
        Job::ping(&self.pool).await
    }
}
