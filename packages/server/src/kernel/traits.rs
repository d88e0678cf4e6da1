// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Filtering semantics live in domains/jobs/filter.rs; pagination in
// domains/jobs/actions. A store only evaluates predicates and orders rows.
//
// Naming convention: Base* for trait names (e.g., BaseJobStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::JobId;
use crate::domains::jobs::filter::JobPredicate;
use crate::domains::jobs::models::{Job, JobWithSections};

// =============================================================================
// Record Store Trait (read-only)
// =============================================================================

#[async_trait]
pub trait BaseJobStore: Send + Sync {
    /// Up to `take` jobs matching `predicate`, ordered by
    /// [`Job::newest_first`], beginning at `start_at` (inclusive).
    ///
    /// An unknown `start_at` returns an empty list, not an error.
    async fn find_many(
        &self,
        predicate: &JobPredicate,
        start_at: Option<JobId>,
        take: i64,
    ) -> Result<Vec<Job>>;

    /// Single job with its requirements and duties, if it exists.
    async fn find_one(&self, id: JobId) -> Result<Option<JobWithSections>>;

    /// Succeeds when the store can serve reads.
    async fn health_check(&self) -> Result<()>;
}
