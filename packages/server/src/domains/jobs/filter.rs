//! Compiles a validated search filter into a store predicate.
//!
//! Semantics:
//! - title / location: case-insensitive substring match
//! - `fullTime: true`: full-time only
//! - `fullTime: false`: any of the three known job types (unknown codes
//!   stay excluded)
//! - `fullTime` absent: no job-type constraint at all
//! - `jobType`: narrows whatever job-type set is already in effect
//!
//! All present constraints are ANDed.

use job_contract::{JobType, ValidatedFilter};

use crate::domains::jobs::models::Job;

/// A predicate over [`Job`] rows. `None` fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPredicate {
    pub title_contains: Option<String>,
    pub location_contains: Option<String>,
    /// Allowed job types. `Some(vec![])` matches nothing.
    pub job_types: Option<Vec<JobType>>,
}

impl JobPredicate {
    pub fn compile(filter: &ValidatedFilter) -> Self {
        let mut job_types = match filter.full_time {
            Some(true) => Some(vec![JobType::FullTime]),
            Some(false) => Some(JobType::ALL.to_vec()),
            None => None,
        };

        if let Some(only) = filter.job_type {
            job_types = Some(match job_types {
                Some(types) => types.into_iter().filter(|t| *t == only).collect(),
                None => vec![only],
            });
        }

        Self {
            title_contains: filter.job_title.clone(),
            location_contains: filter.location.clone(),
            job_types,
        }
    }

    /// Evaluate the predicate in memory. Mirrors the SQL in
    /// [`Job::find_page`] for ASCII text. Case folding here is Unicode
    /// `to_lowercase`; Postgres `lower()` follows the database locale, so
    /// non-ASCII titles and locations may compare differently.
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(title) = &self.title_contains {
            if !contains_ignore_case(&job.job_title, title) {
                return false;
            }
        }

        if let Some(location) = &self.location_contains {
            if !contains_ignore_case(&job.location, location) {
                return false;
            }
        }

        if let Some(types) = &self.job_types {
            if !types.iter().any(|t| t.code() == job.job_type) {
                return false;
            }
        }

        true
    }

    /// Job-type codes for SQL binding (`job_type = ANY($n)`).
    pub fn job_type_codes(&self) -> Option<Vec<String>> {
        self.job_types
            .as_ref()
            .map(|types| types.iter().map(|t| t.code().to_string()).collect())
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::JobId;
    use chrono::Utc;
    use job_contract::SearchFilter;
    use uuid::Uuid;

    fn job(title: &str, location: &str, job_type: &str) -> Job {
        Job {
            id: JobId::new(),
            company: "Acme".to_string(),
            company_url: "https://acme.test".to_string(),
            apply_url: "https://acme.test/apply".to_string(),
            logo_url: None,
            logo_bg_color: None,
            job_title: title.to_string(),
            job_type: job_type.to_string(),
            location: location.to_string(),
            description: String::new(),
            salary: "100000".to_string(),
            requirements_id: Uuid::nil(),
            duties_id: Uuid::nil(),
            created_at: Utc::now(),
        }
    }

    fn compile(filter: SearchFilter) -> JobPredicate {
        JobPredicate::compile(&filter.validate().unwrap())
    }

    #[test]
    fn empty_filter_matches_everything() {
        let predicate = compile(SearchFilter::default());
        assert_eq!(predicate, JobPredicate::default());
        assert!(predicate.matches(&job("Anything", "Anywhere", "f")));
        assert!(predicate.matches(&job("Anything", "Anywhere", "zzz")));
        assert_eq!(predicate.job_type_codes(), None);
    }

    #[test]
    fn title_match_is_case_insensitive_substring() {
        let predicate = compile(SearchFilter::builder().job_title("ENGINEER").build());
        assert!(predicate.matches(&job("Software Engineer", "Berlin", "f")));
        assert!(predicate.matches(&job("engineering manager", "Berlin", "f")));
        assert!(!predicate.matches(&job("Designer", "Berlin", "f")));
    }

    #[test]
    fn location_match_is_case_insensitive_substring() {
        let predicate = compile(SearchFilter::builder().location("united").build());
        assert!(predicate.matches(&job("Dev", "United Kingdom", "p")));
        assert!(!predicate.matches(&job("Dev", "Germany", "p")));
    }

    #[test]
    fn full_time_true_restricts_to_full_time() {
        let predicate = compile(SearchFilter::builder().full_time(true).build());
        assert_eq!(predicate.job_type_codes(), Some(vec!["f".to_string()]));
        assert!(predicate.matches(&job("Dev", "Remote", "f")));
        assert!(!predicate.matches(&job("Dev", "Remote", "p")));
        assert!(!predicate.matches(&job("Dev", "Remote", "c")));
    }

    #[test]
    fn full_time_false_enumerates_known_types_only() {
        let predicate = compile(SearchFilter::builder().full_time(false).build());
        assert_eq!(
            predicate.job_type_codes(),
            Some(vec!["f".to_string(), "p".to_string(), "c".to_string()])
        );
        for code in ["f", "p", "c"] {
            assert!(predicate.matches(&job("Dev", "Remote", code)));
        }
        assert!(!predicate.matches(&job("Dev", "Remote", "i")));
    }

    #[test]
    fn constraints_are_anded() {
        let predicate = compile(
            SearchFilter::builder()
                .job_title("rust")
                .location("remote")
                .full_time(true)
                .build(),
        );
        assert!(predicate.matches(&job("Rust Developer", "Remote", "f")));
        assert!(!predicate.matches(&job("Rust Developer", "Remote", "c")));
        assert!(!predicate.matches(&job("Rust Developer", "Oslo", "f")));
        assert!(!predicate.matches(&job("Go Developer", "Remote", "f")));
    }

    #[test]
    fn job_type_narrows_full_time_set() {
        let predicate = compile(SearchFilter::builder().job_type("c").build());
        assert_eq!(predicate.job_types, Some(vec![JobType::Contract]));

        let predicate = compile(SearchFilter::builder().full_time(false).job_type("p").build());
        assert_eq!(predicate.job_types, Some(vec![JobType::PartTime]));

        let predicate = compile(SearchFilter::builder().full_time(true).job_type("p").build());
        assert_eq!(predicate.job_types, Some(vec![]));
        assert!(!predicate.matches(&job("Dev", "Remote", "p")));
        assert!(!predicate.matches(&job("Dev", "Remote", "f")));
    }

    #[test]
    fn compile_is_deterministic() {
        let filter = SearchFilter::builder()
            .job_title("dev")
            .full_time(false)
            .build()
            .validate()
            .unwrap();
        assert_eq!(JobPredicate::compile(&filter), JobPredicate::compile(&filter));
    }

    #[test]
    fn in_memory_case_folding_is_unicode() {
        let predicate = compile(SearchFilter::builder().location("MÜNCHEN").build());
        assert!(predicate.matches(&job("Dev", "München, Germany", "f")));
        assert!(!predicate.matches(&job("Dev", "Munich, Germany", "f")));
    }
}
