// HTTP server setup (Axum)
pub mod app;
pub mod errors;
pub mod routes;

pub use app::*;
