//! Configuration validators
//!
//! Validation implementations for the root configuration and each of its
//! sections.

use super::Validate;
use crate::config::models::*;
use std::collections::HashSet;
use tracing::debug;

impl Validate for ProvidersConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating provider configuration");

        let mut names = HashSet::new();
        for provider in self.all() {
            provider.validate()?;
            if !names.insert(provider.name.as_str()) {
                return Err(format!("Duplicate provider name: {}", provider.name));
            }
        }

        for text in [&self.text.primary, &self.text.fallback] {
            if text.max_tokens == 0 {
                return Err(format!(
                    "Text provider {} max_tokens must be greater than 0",
                    text.name
                ));
            }
        }

        Ok(())
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Provider name cannot be empty".to_string());
        }

        if self.model.trim().is_empty() {
            return Err(format!("Provider {} model cannot be empty", self.name));
        }

        let url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("Provider {} has invalid base_url: {}", self.name, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Provider {} base_url must use http or https",
                self.name
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Provider {} temperature must be between 0 and 2",
                self.name
            ));
        }

        if let Some(env) = &self.api_key_env {
            if env.trim().is_empty() {
                return Err(format!("Provider {} api_key_env cannot be empty", self.name));
            }
        }

        Ok(())
    }
}

impl Validate for RetryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_delay_ms > self.max_delay_ms {
            return Err("Retry base delay must not exceed max delay".to_string());
        }

        if self.backoff_multiplier <= 1.0 || !self.backoff_multiplier.is_finite() {
            return Err("Retry backoff multiplier must be greater than 1.0".to_string());
        }

        Ok(())
    }
}

impl Validate for TelemetryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("Telemetry capacity must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for HealthConfig {
    fn validate(&self) -> Result<(), String> {
        if self.timeout_ms == 0 {
            return Err("Health check timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for HttpConfig {
    fn validate(&self) -> Result<(), String> {
        if self.request_timeout_secs == 0 {
            return Err("HTTP request timeout must be greater than 0".to_string());
        }

        if self.connect_timeout_secs == 0 {
            return Err("HTTP connect timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        Ok(())
    }
}
