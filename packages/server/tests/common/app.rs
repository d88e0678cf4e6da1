//! In-process router backed by the in-memory job store.
//!
//! Requests go through the real router and layers via `oneshot`; no socket
//! is opened.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use job_contract::{JobPage, JobSummary};
use jobboard_core::kernel::{InMemoryJobStore, ServerDeps};
use jobboard_core::server::build_app;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub struct TestApp {
    pub store: Arc<InMemoryJobStore>,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let store = Arc::new(InMemoryJobStore::new());
        let router = build_app(
            ServerDeps::new(store.clone()),
            &[],
            Duration::from_secs(10),
        );

        Self { store, router }
    }

    /// GET `uri` and return the status with the parsed JSON body.
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    /// GET a list page, asserting success.
    pub async fn get_page(&self, uri: &str) -> JobPage {
        let (status, body) = self.get(uri).await;
        assert_eq!(status, StatusCode::OK, "unexpected body: {}", body);
        serde_json::from_value(body).unwrap()
    }

    /// Follow cursors from the first page until exhausted, returning every
    /// page in order. `query` is appended after `?` and must not contain a
    /// cursor.
    pub async fn all_pages(&self, query: &str) -> Vec<Vec<JobSummary>> {
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let uri = match &cursor {
                Some(cursor) => format!("/api/jobs?{}&cursor={}", query, cursor),
                None => format!("/api/jobs?{}", query),
            };
            let page = self.get_page(&uri).await;
            pages.push(page.jobs);

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
            assert!(pages.len() < 1000, "pagination did not terminate");
        }

        pages
    }
}

/// Error code from an error response body.
pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}

pub fn titles(jobs: &[JobSummary]) -> Vec<String> {
    jobs.iter().map(|job| job.job_title.clone()).collect()
}
