// Business domains
pub mod jobs;
