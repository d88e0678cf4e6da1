//! Infinite-scroll accumulation as an explicit state machine.
//!
//! ```text
//!          reset / set_filter                ok
//!   Idle ─────────────────────▶ Loading ───────────▶ Ready ◀─┐
//!                                  │                   │     │ ok
//!                                  │ err               │ fetch_more (has_more)
//!                                  ▼                   ▼     │
//!                                Error ◀──── err ── FetchingMore
//! ```
//!
//! Every command that needs data returns a [`FetchTicket`]. The caller runs
//! the fetch and hands the result back to [`InfiniteJobs::resolve`]. Tickets
//! carry the filter epoch they were issued under; a reset bumps the epoch,
//! so results from a superseded filter are dropped on arrival.
//!
//! Nothing here does I/O. See [`JobsFeed`](super::JobsFeed) for the async
//! driver.

use job_contract::{JobPage, JobSummary, SearchFilter};
use std::collections::HashSet;
use tracing::debug;

use crate::api::ClientError;

/// Primary state. `FetchingMore` is orthogonal; see
/// [`InfiniteJobs::is_fetching_more`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// First page of a new sequence; replaces everything held.
    Reset,
    /// Next page of the current sequence; appended.
    More,
}

/// A fetch the caller must perform, tagged with the epoch that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub epoch: u64,
    pub kind: FetchKind,
    /// Filter to send, cursor included.
    pub filter: SearchFilter,
}

/// Accumulated pages for one search.
#[derive(Debug, Clone, Default)]
pub struct InfiniteJobs {
    filter: SearchFilter,
    epoch: u64,
    status: Status,
    fetching_more: bool,
    pages: Vec<JobPage>,
    error: Option<ClientError>,
}

impl InfiniteJobs {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Start a new sequence for `filter`.
    ///
    /// Clears held pages, advances the epoch and moves to `Loading`. Any
    /// cursor on `filter` is ignored; sequences always start at the top.
    pub fn reset(&mut self, filter: SearchFilter) -> FetchTicket {
        self.epoch += 1;
        self.filter = filter.with_cursor(None);
        self.status = Status::Loading;
        self.fetching_more = false;
        self.pages.clear();
        self.error = None;

        debug!(epoch = self.epoch, filter = ?self.filter, "Resetting job list");

        FetchTicket {
            epoch: self.epoch,
            kind: FetchKind::Reset,
            filter: self.filter.clone(),
        }
    }

    /// Apply a filter from the view.
    ///
    /// Restarts when nothing has been loaded yet, when the last fetch
    /// failed, or when a search field (title, location, full-time, job type)
    /// changed. A limit-only change on a healthy list is kept for later
    /// fetches without discarding what is shown.
    pub fn set_filter(&mut self, filter: SearchFilter) -> Option<FetchTicket> {
        if matches!(self.status, Status::Idle | Status::Error)
            || !self.filter.same_search(&filter)
        {
            return Some(self.reset(filter));
        }

        self.filter.limit = filter.limit;
        None
    }

    /// Ask for the next page.
    ///
    /// No-op (returns `None`) unless the list is `Ready`, has a next cursor,
    /// and no other page fetch is outstanding.
    pub fn fetch_more(&mut self) -> Option<FetchTicket> {
        if self.status != Status::Ready || self.fetching_more {
            return None;
        }
        let cursor = self.pages.last()?.next_cursor.clone()?;

        self.fetching_more = true;

        Some(FetchTicket {
            epoch: self.epoch,
            kind: FetchKind::More,
            filter: self.filter.with_cursor(Some(cursor)),
        })
    }

    /// Re-issue the current filter as a fresh sequence.
    pub fn retry(&mut self) -> FetchTicket {
        let filter = self.filter.clone();
        self.reset(filter)
    }

    /// Feed back the outcome of `ticket`'s fetch.
    ///
    /// Returns `false` when the ticket belongs to a superseded epoch and the
    /// result was dropped.
    pub fn resolve(&mut self, ticket: &FetchTicket, result: Result<JobPage, ClientError>) -> bool {
        if ticket.epoch != self.epoch {
            debug!(
                ticket_epoch = ticket.epoch,
                current_epoch = self.epoch,
                "Dropping stale job page"
            );
            return false;
        }

        match ticket.kind {
            FetchKind::Reset => {
                if self.status != Status::Loading {
                    return false;
                }
                match result {
                    Ok(page) => {
                        self.pages = vec![page];
                        self.status = Status::Ready;
                    }
                    Err(e) => self.fail(e),
                }
            }
            FetchKind::More => {
                if !self.fetching_more {
                    return false;
                }
                self.fetching_more = false;
                match result {
                    Ok(page) => {
                        self.pages.push(page);
                        self.status = Status::Ready;
                    }
                    // Held pages stay visible.
                    Err(e) => self.fail(e),
                }
            }
        }

        true
    }

    fn fail(&mut self, error: ClientError) {
        debug!(epoch = self.epoch, error = %error, "Job fetch failed");
        self.status = Status::Error;
        self.error = Some(error);
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// All held jobs in page order. A job seen on an earlier page wins over
    /// a repeat on a later one.
    pub fn jobs(&self) -> Vec<&JobSummary> {
        let mut seen = HashSet::new();
        self.pages
            .iter()
            .flat_map(|page| page.jobs.iter())
            .filter(|job| seen.insert(job.id))
            .collect()
    }

    /// True only during the first fetch of a sequence.
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn is_fetching_more(&self) -> bool {
        self.fetching_more
    }

    /// Whether the last held page has a next cursor.
    pub fn has_more(&self) -> bool {
        self.pages
            .last()
            .map(JobPage::has_next)
            .unwrap_or(false)
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    /// Loaded successfully and nothing left to fetch.
    pub fn is_exhausted(&self) -> bool {
        self.status == Status::Ready && !self.has_more()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn error(&self) -> Option<&ClientError> {
        self.error.as_ref()
    }

    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn pages(&self) -> &[JobPage] {
        &self.pages
    }
}
