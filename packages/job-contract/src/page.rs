use serde::{Deserialize, Serialize};

use crate::job::JobSummary;

/// One page of results plus the continuation token.
///
/// `next_cursor` is `null` on the wire once the sequence is exhausted. The
/// token is opaque: pass it back unchanged as the next request's `cursor`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPage {
    pub jobs: Vec<JobSummary>,
    pub next_cursor: Option<String>,
}

impl JobPage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }
}
