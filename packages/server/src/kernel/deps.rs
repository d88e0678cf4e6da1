//! Server dependencies (using traits for testability)
//!
//! Handlers reach the record store only through [`ServerDeps`], so tests
//! can swap in [`InMemoryJobStore`](crate::kernel::InMemoryJobStore).

use sqlx::PgPool;
use std::sync::Arc;

use crate::kernel::{BaseJobStore, PostgresJobStore};

#[derive(Clone)]
pub struct ServerDeps {
    pub job_store: Arc<dyn BaseJobStore>,
}

impl ServerDeps {
    pub fn new(job_store: Arc<dyn BaseJobStore>) -> Self {
        Self { job_store }
    }

    /// Dependencies backed by Postgres.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(Arc::new(PostgresJobStore::new(pool)))
    }

    pub fn job_store(&self) -> &dyn BaseJobStore {
        self.job_store.as_ref()
    }
}
