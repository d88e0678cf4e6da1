//! Test fixtures for creating job postings.
//!
//! Timestamps are offsets in minutes from a fixed base so ordering is
//! deterministic regardless of when the test runs.

use chrono::{DateTime, Duration, TimeZone, Utc};
use job_contract::{JobSection, JobType, NewJob};
use jobboard_core::common::JobId;
use jobboard_core::domains::jobs::{Job, JobWithSections};
use jobboard_core::kernel::InMemoryJobStore;
use uuid::Uuid;

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

pub fn at_minute(minutes: i64) -> DateTime<Utc> {
    base_time() + Duration::minutes(minutes)
}

/// A complete posting with the given title, type and location.
pub fn new_job(title: &str, job_type: JobType, location: &str, minutes: i64) -> NewJob {
    NewJob::builder()
        .company("Acme Corp")
        .company_url("https://acme.test")
        .apply_url("https://acme.test/apply")
        .logo_url("https://acme.test/logo.svg")
        .job_title(title)
        .job_type(job_type)
        .location(location)
        .description(format!("{} at Acme", title))
        .salary("$100,000")
        .requirements(JobSection {
            content: "What we need".to_string(),
            items: vec!["Rust".to_string(), "SQL".to_string(), "Git".to_string()],
        })
        .duties(JobSection {
            content: "What you'll do".to_string(),
            items: vec!["Ship features".to_string(), "Review code".to_string()],
        })
        .created_at(at_minute(minutes))
        .build()
}

/// Insert `count` full-time jobs titled "Job 00", "Job 01", ... where a
/// higher number is newer.
pub fn seed_numbered(store: &InMemoryJobStore, count: usize) -> Vec<JobWithSections> {
    (0..count)
        .map(|i| {
            store.insert(new_job(
                &format!("Job {:02}", i),
                JobType::FullTime,
                "Remote",
                i as i64,
            ))
        })
        .collect()
}

/// A record carrying an arbitrary stored job-type code, including ones
/// outside the known set.
pub fn record_with_code(code: &str, title: &str, minutes: i64) -> JobWithSections {
    JobWithSections {
        job: Job {
            id: JobId::new(),
            company: "Legacy Inc".to_string(),
            company_url: "https://legacy.test".to_string(),
            apply_url: "https://legacy.test/apply".to_string(),
            logo_url: None,
            logo_bg_color: None,
            job_title: title.to_string(),
            job_type: code.to_string(),
            location: "Remote".to_string(),
            description: "Imported posting".to_string(),
            salary: "n/a".to_string(),
            requirements_id: Uuid::now_v7(),
            duties_id: Uuid::now_v7(),
            created_at: at_minute(minutes),
        },
        requirements: JobSection::default(),
        duties: JobSection::default(),
    }
}
