//! Error Handling utilities
//!
//! This module provides the error taxonomy shared by every component.

pub mod error;

pub use error::*;
