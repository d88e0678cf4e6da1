//! Jobs board client
//!
//! An HTTP client for the list/detail endpoints and the state that turns a
//! sequence of cursor pages into one growing list.
//!
//! # Example
//!
//! ```rust,ignore
//! use jobboard_client::{ClientConfig, JobsClient, JobsFeed};
//! use job_contract::SearchFilter;
//!
//! let config = ClientConfig::from_env()?;
//! let feed = JobsFeed::new(JobsClient::new(config.clone())?, config.timeout);
//!
//! feed.reset(SearchFilter::builder().job_title("engineer").build()).await;
//! while feed.snapshot().has_more() {
//!     feed.fetch_more().await;
//! }
//! ```

pub mod api;
pub mod state;

pub use api::{ClientConfig, ClientError, JobsApi, JobsClient};
pub use state::{FetchKind, FetchTicket, InfiniteJobs, JobsFeed, Status};
