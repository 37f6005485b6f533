//! Configuration management
//!
//! This module handles loading, validation, and management of the orchestration
//! layer's configuration.

mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{OrchestratorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            OrchestratorError::Config(format!("Failed to read config file: {}", e))
        })?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| OrchestratorError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from defaults and environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_overrides()?;

        config.validate()?;
        Ok(config)
    }

    /// Load `.env`, then the optional file, then environment overrides
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        if let Ok(env_path) = dotenvy::dotenv() {
            debug!("Loaded environment from {:?}", env_path);
        }

        let mut config = match path {
            Some(path) => Self::from_file(path).await?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.providers
            .validate()
            .map_err(|e| OrchestratorError::Config(format!("Provider config error: {}", e)))?;
        self.retry
            .validate()
            .map_err(|e| OrchestratorError::Config(format!("Retry config error: {}", e)))?;
        self.telemetry
            .validate()
            .map_err(|e| OrchestratorError::Config(format!("Telemetry config error: {}", e)))?;
        self.health
            .validate()
            .map_err(|e| OrchestratorError::Config(format!("Health config error: {}", e)))?;
        self.http
            .validate()
            .map_err(|e| OrchestratorError::Config(format!("HTTP config error: {}", e)))?;
        Validate::validate(&self.server)
            .map_err(|e| OrchestratorError::Config(format!("Server config error: {}", e)))?;
        self.logging
            .validate()
            .map_err(|e| OrchestratorError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }
}
