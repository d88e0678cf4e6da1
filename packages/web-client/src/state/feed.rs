//! Async driver for [`InfiniteJobs`].
//!
//! Issues the fetches the state machine asks for, bounds each one with a
//! timeout, and feeds results back. The state lock is never held across a
//! fetch, so a reset can land while a page request is still in flight.

use job_contract::SearchFilter;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::warn;

use super::infinite::{FetchTicket, InfiniteJobs};
use crate::api::{ClientError, JobsApi};

pub struct JobsFeed<A> {
    api: A,
    state: Mutex<InfiniteJobs>,
    timeout: Duration,
}

impl<A: JobsApi> JobsFeed<A> {
    pub fn new(api: A, timeout: Duration) -> Self {
        Self {
            api,
            state: Mutex::new(InfiniteJobs::new()),
            timeout,
        }
    }

    /// Restart with `filter` and load its first page.
    ///
    /// Returns whether the result was applied (it is not when another reset
    /// superseded this one before it finished).
    pub async fn reset(&self, filter: SearchFilter) -> bool {
        let ticket = self.lock().reset(filter);
        self.run(ticket).await
    }

    /// Apply a view filter; fetches only if the search changed or the list
    /// is idle or in error.
    ///
    /// `false` covers two cases: no fetch was needed, or the fetch was
    /// superseded by a later reset. Use [`JobsFeed::snapshot`] to tell them
    /// apart when it matters.
    pub async fn set_filter(&self, filter: SearchFilter) -> bool {
        let ticket = self.lock().set_filter(filter);
        match ticket {
            Some(ticket) => self.run(ticket).await,
            None => false,
        }
    }

    /// Load the next page if there is one and none is in flight.
    pub async fn fetch_more(&self) -> bool {
        let ticket = self.lock().fetch_more();
        match ticket {
            Some(ticket) => self.run(ticket).await,
            None => false,
        }
    }

    pub async fn retry(&self) -> bool {
        let ticket = self.lock().retry();
        self.run(ticket).await
    }

    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> InfiniteJobs {
        self.lock().clone()
    }

    /// Read the current state without copying it.
    pub fn with_state<R>(&self, f: impl FnOnce(&InfiniteJobs) -> R) -> R {
        f(&self.lock())
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    async fn run(&self, ticket: FetchTicket) -> bool {
        let result = match tokio::time::timeout(self.timeout, self.api.list_jobs(&ticket.filter)).await
        {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    epoch = ticket.epoch,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Job fetch timed out"
                );
                Err(ClientError::Timeout(self.timeout))
            }
        };

        self.lock().resolve(&ticket, result)
    }

    fn lock(&self) -> MutexGuard<'_, InfiniteJobs> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
