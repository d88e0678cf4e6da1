//! Job list and detail endpoints.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use job_contract::{JobDetail, JobPage, SearchFilter, ValidationError};

use crate::domains::jobs::{actions, JobError};
use crate::server::app::AppState;

/// `GET /api/jobs`
///
/// Query parameters follow [`SearchFilter`]'s wire names. Anything that
/// fails to parse or validate is a 400 before the store is touched.
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    query: Result<Query<SearchFilter>, QueryRejection>,
) -> Result<Json<JobPage>, JobError> {
    let Query(filter) =
        query.map_err(|rejection| ValidationError::Malformed(rejection.body_text()))?;
    let filter = filter.validate()?;

    let page = actions::list_jobs(&filter, state.deps.job_store()).await?;
    Ok(Json(page))
}

/// `GET /api/jobs/:id`
pub async fn get_job_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobDetail>, JobError> {
    let job = actions::get_job(&job_id, state.deps.job_store()).await?;
    Ok(Json(job))
}
