// Common types and utilities shared across the application

pub mod id;
pub mod pagination;

pub use id::JobId;
pub use pagination::{split_lookahead, Cursor};
