//! Request/response contract for the jobs board.
//!
//! These types are the only thing the server and its clients share. They
//! carry no I/O: the server validates incoming [`SearchFilter`]s into
//! [`ValidatedFilter`]s, the client serializes them into query strings, and
//! both speak [`JobPage`] / [`JobDetail`] on the way back.

pub mod error;
pub mod filter;
pub mod job;
pub mod page;

pub use error::{ErrorBody, ErrorCode, ErrorPayload, ValidationError};
pub use filter::{PageLimit, SearchFilter, ValidatedFilter};
pub use job::{JobDetail, JobSection, JobSummary, JobType, NewJob};
pub use page::JobPage;
