//! HTTP access to the jobs API

mod client;

pub use client::*;
