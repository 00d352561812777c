//! AURA: villa rental earnings estimator
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod estimation;
pub mod inquiry;
pub mod wizard;
pub mod dictionary;
pub mod api;
