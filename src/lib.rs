// Organization Directory Proxy - API Core
//
// This crate provides a thin read proxy in front of the external
// organization-data service: it forwards pagination/filter/sort parameters
// upstream, maps the upstream JSON into typed records and computes the
// per-page employee-count aggregate.

pub mod config;
pub mod kernel;
pub mod models;
pub mod server;

pub use config::*;
