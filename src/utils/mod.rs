//! Shared utilities
//!
//! - **error**: error types and their HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
