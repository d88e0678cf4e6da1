//! Search filter: the loosely-typed wire form and its validated counterpart.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::ValidationError;
use crate::job::JobType;

// ============================================================================
// Page limit
// ============================================================================

/// Page size, guaranteed to be within `[PageLimit::MIN, PageLimit::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageLimit(u8);

impl PageLimit {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 100;
    pub const DEFAULT: PageLimit = PageLimit(10);

    pub fn new(limit: i64) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&limit) {
            return Err(ValidationError::LimitOutOfRange {
                limit,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(PageLimit(limit as u8))
    }

    pub fn get(&self) -> usize {
        self.0 as usize
    }

    /// Rows to request from the store: one more than the page holds, so a
    /// full extra row signals that another page exists.
    pub fn fetch_limit(&self) -> i64 {
        self.0 as i64 + 1
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// Wire filter
// ============================================================================

/// Search parameters exactly as they arrive on the wire.
///
/// Every field is optional. An absent field imposes no constraint; it never
/// means "match empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
#[builder(field_defaults(default, setter(strip_option, into)))]
pub struct SearchFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_time: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl SearchFilter {
    /// Whether `other` describes the same search, ignoring page size and
    /// cursor. A change in any of these fields restarts pagination.
    pub fn same_search(&self, other: &SearchFilter) -> bool {
        self.job_title == other.job_title
            && self.location == other.location
            && self.full_time == other.full_time
            && self.job_type == other.job_type
    }

    /// Copy of this filter resuming at `cursor`.
    pub fn with_cursor(&self, cursor: Option<String>) -> SearchFilter {
        SearchFilter {
            cursor,
            ..self.clone()
        }
    }

    /// Query-string pairs in wire naming, skipping absent fields.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(title) = &self.job_title {
            pairs.push(("jobTitle", title.clone()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(full_time) = self.full_time {
            pairs.push(("fullTime", full_time.to_string()));
        }
        if let Some(job_type) = &self.job_type {
            pairs.push(("jobType", job_type.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor", cursor.clone()));
        }
        pairs
    }

    /// Validate into a [`ValidatedFilter`].
    ///
    /// Rejects an out-of-range limit and unknown job-type codes. Empty
    /// title/location strings are treated as absent.
    pub fn validate(&self) -> Result<ValidatedFilter, ValidationError> {
        let limit = match self.limit {
            Some(limit) => PageLimit::new(limit)?,
            None => PageLimit::DEFAULT,
        };

        let job_type = self
            .job_type
            .as_deref()
            .map(str::parse::<JobType>)
            .transpose()?;

        Ok(ValidatedFilter {
            job_title: non_empty(&self.job_title),
            location: non_empty(&self.location),
            full_time: self.full_time,
            job_type,
            limit,
            cursor: non_empty(&self.cursor),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

// ============================================================================
// Validated filter
// ============================================================================

/// A search filter that passed validation.
///
/// The cursor is still the opaque token; decoding it is the server's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFilter {
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub full_time: Option<bool>,
    pub job_type: Option<JobType>,
    pub limit: PageLimit,
    pub cursor: Option<String>,
}
