use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejections raised before a request ever reaches the record store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("limit must be between {min} and {max}, got {limit}")]
    LimitOutOfRange { limit: i64, min: i64, max: i64 },

    #[error("unknown job type code: {0:?}")]
    UnknownJobType(String),

    #[error("invalid cursor")]
    InvalidCursor,

    #[error("invalid job id: {0:?}")]
    InvalidId(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("malformed request: {0}")]
    Malformed(String),
}

/// Machine-readable error class carried in every non-2xx response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    ValidationError,
    NotFound,
    Unavailable,
    Internal,
}

/// `{ "error": { "code": ..., "message": ... } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: ErrorPayload {
                code,
                message: message.into(),
            },
        }
    }
}
