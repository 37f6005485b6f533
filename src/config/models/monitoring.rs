//! Telemetry, health check and logging configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Telemetry buffer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Maximum number of retained events
    #[serde(default = "default_telemetry_capacity")]
    pub capacity: usize,
    /// Window used when stats are logged without an explicit window
    #[serde(default = "default_window_ms")]
    pub default_window_ms: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            capacity: default_telemetry_capacity(),
            default_window_ms: default_window_ms(),
        }
    }
}

/// Startup health check configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Run the startup probe
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Per-probe timeout in milliseconds
    #[serde(default = "default_health_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: default_health_timeout_ms(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (`RUST_LOG` takes precedence)
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Text,
        }
    }
}
