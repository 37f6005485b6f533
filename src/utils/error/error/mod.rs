//! Error handling for the orchestration layer
//!
//! This module defines all error types used by the provider registry, the
//! resilient client and the health checker.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{OrchestratorError, Result, TransportError};
