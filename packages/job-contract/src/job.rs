use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::error::ValidationError;

// ============================================================================
// Job type
// ============================================================================

/// The closed set of employment types a posting can carry.
///
/// Stored and transmitted as single-letter codes (`f`, `p`, `c`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "f")]
    FullTime,
    #[serde(rename = "p")]
    PartTime,
    #[serde(rename = "c")]
    Contract,
}

impl JobType {
    /// Every known job type, in code order.
    pub const ALL: [JobType; 3] = [JobType::FullTime, JobType::PartTime, JobType::Contract];

    pub fn code(&self) -> &'static str {
        match self {
            JobType::FullTime => "f",
            JobType::PartTime => "p",
            JobType::Contract => "c",
        }
    }

    /// Human-readable label for rendering.
    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full Time",
            JobType::PartTime => "Part Time",
            JobType::Contract => "Contract",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for JobType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f" => Ok(JobType::FullTime),
            "p" => Ok(JobType::PartTime),
            "c" => Ok(JobType::Contract),
            other => Err(ValidationError::UnknownJobType(other.to_string())),
        }
    }
}

// ============================================================================
// Response shapes
// ============================================================================

/// A content paragraph followed by an ordered list of bullets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSection {
    pub content: String,
    pub items: Vec<String>,
}

/// List-endpoint projection of a job posting.
///
/// Description, requirements and duties are left out to keep pages small;
/// fetch a [`JobDetail`] for those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: Uuid,
    pub company: String,
    pub company_url: String,
    pub apply_url: String,
    pub logo_url: Option<String>,
    pub logo_bg_color: Option<String>,
    pub job_title: String,
    /// Raw stored code. Usually one of [`JobType`]'s codes, but the store is
    /// allowed to hold others.
    pub job_type: String,
    pub location: String,
    pub salary: String,
    pub created_at: DateTime<Utc>,
}

impl JobSummary {
    /// The parsed job type, or `None` for a code outside the known set.
    pub fn kind(&self) -> Option<JobType> {
        self.job_type.parse().ok()
    }
}

/// Single-record projection, including the nested blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    #[serde(flatten)]
    pub summary: JobSummary,
    pub description: String,
    pub requirements: JobSection,
    pub duties: JobSection,
}

// ============================================================================
// Write path
// ============================================================================

/// Input for creating a posting (seeding and fixtures).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
#[builder(field_defaults(setter(into)))]
pub struct NewJob {
    pub company: String,
    pub company_url: String,
    pub apply_url: String,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    pub logo_url: Option<String>,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    pub logo_bg_color: Option<String>,
    pub job_title: String,
    pub job_type: JobType,
    pub location: String,
    pub description: String,
    pub salary: String,
    pub requirements: JobSection,
    pub duties: JobSection,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    pub created_at: Option<DateTime<Utc>>,
}

impl NewJob {
    /// Field-presence check. Nothing beyond "is it there" is enforced.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("company", &self.company),
            ("companyUrl", &self.company_url),
            ("applyUrl", &self.apply_url),
            ("jobTitle", &self.job_title),
            ("location", &self.location),
            ("description", &self.description),
            ("salary", &self.salary),
            ("requirements.content", &self.requirements.content),
            ("duties.content", &self.duties.content),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(name));
            }
        }

        Ok(())
    }
}
