//! Networking modules for the backend REST API and the API tester.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles backend REST calls with bearer injection, `tester` runs
//! free-form requests, `types` defines the wire schema, and `error` the
//! failure type pages render.

pub mod api;
pub mod error;
pub mod tester;
pub mod types;
