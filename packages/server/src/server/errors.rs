//! HTTP mapping for job query failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use job_contract::{ErrorBody, ErrorCode};

use crate::domains::jobs::JobError;

impl JobError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            JobError::Validation(_) => StatusCode::BAD_REQUEST,
            JobError::NotFound(_) => StatusCode::NOT_FOUND,
            JobError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            JobError::Validation(_) => ErrorCode::ValidationError,
            JobError::NotFound(_) => ErrorCode::NotFound,
            JobError::Unavailable(_) => ErrorCode::Unavailable,
        }
    }
}

impl IntoResponse for JobError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Store details stay in the logs.
        let message = match &self {
            JobError::Unavailable(error) => {
                tracing::error!(error = %format!("{:#}", error), "Record store unavailable");
                "record store unavailable".to_string()
            }
            other => {
                tracing::debug!(error = %other, status = %status, "Rejected job query");
                other.to_string()
            }
        };

        (status, Json(ErrorBody::new(self.error_code(), message))).into_response()
    }
}
