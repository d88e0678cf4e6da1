use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use job_contract::{JobSection, NewJob};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::common::JobId;
use crate::domains::jobs::filter::JobPredicate;

/// Job posting row. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: JobId,

    // Company
    pub company: String,
    pub company_url: String,
    pub apply_url: String,
    pub logo_url: Option<String>,
    pub logo_bg_color: Option<String>,

    // Posting
    pub job_title: String,
    /// Raw job-type code. Known codes are `f`, `p`, `c`.
    pub job_type: String,
    pub location: String,
    pub description: String,
    pub salary: String,

    // Nested blocks (job_sections)
    pub requirements_id: Uuid,
    pub duties_id: Uuid,

    pub created_at: DateTime<Utc>,
}

/// A job together with its requirements and duties blocks.
#[derive(Debug, Clone)]
pub struct JobWithSections {
    pub job: Job,
    pub requirements: JobSection,
    pub duties: JobSection,
}

impl Job {
    /// Total order used by every listing: newest first, id descending on
    /// equal timestamps.
    pub fn newest_first(a: &Job, b: &Job) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Find up to `fetch_limit` jobs matching `predicate`, newest first,
    /// beginning at the job `start_at` (inclusive).
    ///
    /// A `start_at` id that doesn't exist yields no rows: the anchor
    /// subquery comes back empty and the row comparison is NULL.
    pub async fn find_page(
        predicate: &JobPredicate,
        start_at: Option<JobId>,
        fetch_limit: i64,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let jobs = sqlx::query_as::<_, Self>(
            r#"
            SELECT j.*
            FROM jobs j
            WHERE ($1::text IS NULL OR strpos(lower(j.job_title), lower($1)) > 0)
              AND ($2::text IS NULL OR strpos(lower(j.location), lower($2)) > 0)
              AND ($3::text[] IS NULL OR j.job_type = ANY($3))
              AND ($4::uuid IS NULL OR (j.created_at, j.id) <= (
                    SELECT a.created_at, a.id FROM jobs a WHERE a.id = $4
                  ))
            ORDER BY j.created_at DESC, j.id DESC
            LIMIT $5
            "#,
        )
        .bind(predicate.title_contains.as_deref())
        .bind(predicate.location_contains.as_deref())
        .bind(predicate.job_type_codes())
        .bind(start_at)
        .bind(fetch_limit)
        .fetch_all(pool)
        .await?;

        Ok(jobs)
    }

    pub async fn find_by_id_optional(id: JobId, pool: &PgPool) -> Result<Option<Self>> {
        let job = sqlx::query_as::<_, Self>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(job)
    }

    /// Find a job and load both of its blocks.
    pub async fn find_with_sections(id: JobId, pool: &PgPool) -> Result<Option<JobWithSections>> {
        let Some(job) = Self::find_by_id_optional(id, pool).await? else {
            return Ok(None);
        };

        let requirements = load_section(job.requirements_id, pool)
            .await
            .with_context(|| format!("Failed to load requirements for job {}", id))?;
        let duties = load_section(job.duties_id, pool)
            .await
            .with_context(|| format!("Failed to load duties for job {}", id))?;

        Ok(Some(JobWithSections {
            job,
            requirements,
            duties,
        }))
    }

    /// Cheap connectivity probe.
    pub async fn ping(pool: &PgPool) -> Result<()> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Insert a job with its requirements and duties in one transaction.
    pub async fn create(input: &NewJob, pool: &PgPool) -> Result<JobWithSections> {
        let mut tx = pool.begin().await?;

        let requirements_id = insert_section(&input.requirements, &mut tx).await?;
        let duties_id = insert_section(&input.duties, &mut tx).await?;

        let job = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO jobs (
                id, company, company_url, apply_url, logo_url, logo_bg_color,
                job_title, job_type, location, description, salary,
                requirements_id, duties_id, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, COALESCE($14, NOW()))
            RETURNING *
            "#,
        )
        .bind(JobId::new())
        .bind(&input.company)
        .bind(&input.company_url)
        .bind(&input.apply_url)
        .bind(&input.logo_url)
        .bind(&input.logo_bg_color)
        .bind(&input.job_title)
        .bind(input.job_type.code())
        .bind(&input.location)
        .bind(&input.description)
        .bind(&input.salary)
        .bind(requirements_id)
        .bind(duties_id)
        .bind(input.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(JobWithSections {
            job,
            requirements: input.requirements.clone(),
            duties: input.duties.clone(),
        })
    }
}

async fn load_section(id: Uuid, pool: &PgPool) -> Result<JobSection> {
    let content = sqlx::query_scalar::<_, String>("SELECT content FROM job_sections WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await?;

    let items = sqlx::query_scalar::<_, String>(
        "SELECT item FROM job_section_items WHERE section_id = $1 ORDER BY position ASC",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(JobSection { content, items })
}

async fn insert_section(section: &JobSection, tx: &mut Transaction<'_, Postgres>) -> Result<Uuid> {
    let id = Uuid::now_v7();

    sqlx::query("INSERT INTO job_sections (id, content) VALUES ($1, $2)")
        .bind(id)
        .bind(&section.content)
        .execute(&mut **tx)
        .await?;

    for (position, item) in section.items.iter().enumerate() {
        sqlx::query(
            "INSERT INTO job_section_items (id, section_id, position, item) VALUES ($1, $2, $3, $4)",
        )
        .bind(Uuid::now_v7())
        .bind(id)
        .bind(position as i32)
        .bind(item)
        .execute(&mut **tx)
        .await?;
    }

    Ok(id)
}
