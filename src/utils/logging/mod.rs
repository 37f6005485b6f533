//! Logging setup
//!
//! Installs the global `tracing` subscriber. `RUST_LOG`, when set, overrides
//! the configured level.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{OrchestratorError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` first, then the configured directive
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| {
        OrchestratorError::config(format!("Invalid log level '{}': {}", config.level, e))
    })
}

/// Initialize the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(false)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .try_init(),
    };

    installed.map_err(|e| OrchestratorError::config(format!("Failed to initialize logging: {}", e)))
}
