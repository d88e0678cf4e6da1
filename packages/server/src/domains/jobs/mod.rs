//! Job postings: filtering, cursor pagination and single-record lookup.

pub mod actions;
pub mod data;
pub mod errors;
pub mod filter;
pub mod models;

pub use errors::JobError;
pub use filter::JobPredicate;
pub use models::{Job, JobWithSections};
