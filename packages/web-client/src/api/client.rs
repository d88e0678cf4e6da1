//! REST client for the jobs API

use anyhow::{Context, Result};
use async_trait::async_trait;
use job_contract::{ErrorBody, JobDetail, JobPage, SearchFilter, ValidationError};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server origin, without the `/api` prefix
    pub base_url: String,
    /// Upper bound on a single request
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load from `API_URL` and `API_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_secs = match std::env::var("API_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .context("API_TIMEOUT_SECS must be a valid number")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Error type for jobs API calls
///
/// Carries messages rather than source errors so it can be held in
/// client state and cloned into views.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(#[from] ValidationError),

    #[error("Rejected by server: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ClientError {
    /// Whether re-issuing the same request could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ClientError::Network(_) | ClientError::Unavailable(_) | ClientError::Timeout(_)
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Serialization(e.to_string())
    }
}

/// Read side of the jobs API.
///
/// [`JobsClient`] talks HTTP; tests and embedders can supply their own.
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// Fetch one page for `filter` (cursor included).
    async fn list_jobs(&self, filter: &SearchFilter) -> Result<JobPage, ClientError>;

    /// Fetch a single job with its requirements and duties.
    async fn get_job(&self, id: Uuid) -> Result<JobDetail, ClientError>;
}

/// HTTP client for the jobs API
#[derive(Clone)]
pub struct JobsClient {
    client: reqwest::Client,
    base_url: String,
}

impl JobsClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let message = serde_json::from_slice::<ErrorBody>(&bytes)
            .map(|body| body.error.message)
            .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned());

        warn!(status = %status, message = %message, "Jobs API error");

        Err(match status {
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::SERVICE_UNAVAILABLE => ClientError::Unavailable(message),
            other => ClientError::Status {
                status: other.as_u16(),
                message,
            },
        })
    }
}

#[async_trait]
impl JobsApi for JobsClient {
    async fn list_jobs(&self, filter: &SearchFilter) -> Result<JobPage, ClientError> {
        // Out-of-range limits and unknown codes never leave the client.
        filter.validate()?;

        let pairs = filter.to_query_pairs();
        debug!(query = ?pairs, "Listing jobs");

        let response = self
            .client
            .get(format!("{}/api/jobs", self.base_url))
            .query(&pairs)
            .send()
            .await?;

        Self::read(response).await
    }

    async fn get_job(&self, id: Uuid) -> Result<JobDetail, ClientError> {
        debug!(job_id = %id, "Getting job");

        let response = self
            .client
            .get(format!("{}/api/jobs/{}", self.base_url, id))
            .send()
            .await?;

        Self::read(response).await
    }
}
