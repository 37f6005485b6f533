//! Configuration validation
//!
//! Each configuration section checks its own invariants; [`crate::config::Config::validate`]
//! runs them all and prefixes failures with the section name.

mod config_validators;

/// Section-level validation returning a human-readable reason on failure
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
