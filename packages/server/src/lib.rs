// Developer Jobs Board - API Core
//
// Filtered, cursor-paginated listing of job postings over an opaque record
// store. Domain code lives in domains/, store adapters and dependency
// wiring in kernel/, the HTTP surface in server/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
