//! Client-side list state

mod feed;
mod infinite;

pub use feed::JobsFeed;
pub use infinite::{FetchKind, FetchTicket, InfiniteJobs, Status};
