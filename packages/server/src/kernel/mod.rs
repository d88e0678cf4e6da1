//! Kernel module - record store adapters and dependency wiring.

pub mod deps;
pub mod job_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use job_store::PostgresJobStore;
pub use test_dependencies::InMemoryJobStore;
pub use traits::*;
