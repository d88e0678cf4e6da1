//! Conversions from store rows to wire shapes.

use job_contract::{JobDetail, JobSummary};

use crate::domains::jobs::models::{Job, JobWithSections};

impl From<Job> for JobSummary {
    fn from(job: Job) -> Self {
        Self {
            id: job.id.into_uuid(),
            company: job.company,
            company_url: job.company_url,
            apply_url: job.apply_url,
            logo_url: job.logo_url,
            logo_bg_color: job.logo_bg_color,
            job_title: job.job_title,
            job_type: job.job_type,
            location: job.location,
            salary: job.salary,
            created_at: job.created_at,
        }
    }
}

impl From<JobWithSections> for JobDetail {
    fn from(record: JobWithSections) -> Self {
        let JobWithSections {
            job,
            requirements,
            duties,
        } = record;
        let description = job.description.clone();

        Self {
            summary: JobSummary::from(job),
            description,
            requirements,
            duties,
        }
    }
}
