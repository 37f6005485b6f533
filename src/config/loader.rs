//! Configuration loading utilities
//!
//! Environment variable overrides applied on top of file or default configuration.

use super::Config;
use crate::utils::error::{OrchestratorError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

const ENV_MAX_RETRIES: &str = "STORYWEAVE_MAX_RETRIES";
const ENV_HEALTH_TIMEOUT_MS: &str = "STORYWEAVE_HEALTH_TIMEOUT_MS";
const ENV_TELEMETRY_CAPACITY: &str = "STORYWEAVE_TELEMETRY_CAPACITY";
const ENV_HOST: &str = "STORYWEAVE_HOST";
const ENV_PORT: &str = "STORYWEAVE_PORT";
const ENV_LOG_LEVEL: &str = "STORYWEAVE_LOG_LEVEL";
const ENV_LOG_FORMAT: &str = "STORYWEAVE_LOG_FORMAT";

impl Config {
    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup
    pub(crate) fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_MAX_RETRIES) {
            self.retry.max_retries = parse_var(ENV_MAX_RETRIES, &value)?;
        }
        if let Some(value) = lookup(ENV_HEALTH_TIMEOUT_MS) {
            self.health.timeout_ms = parse_var(ENV_HEALTH_TIMEOUT_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_TELEMETRY_CAPACITY) {
            self.telemetry.capacity = parse_var(ENV_TELEMETRY_CAPACITY, &value)?;
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(value) = lookup(ENV_PORT) {
            self.server.port = parse_var(ENV_PORT, &value)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(value) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = value
                .parse()
                .map_err(|e| OrchestratorError::Config(format!("Invalid {}: {}", ENV_LOG_FORMAT, e)))?;
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| OrchestratorError::Config(format!("Invalid {}: {}", key, e)))
}
