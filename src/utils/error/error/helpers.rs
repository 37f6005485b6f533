//! Helper functions for creating specific error types

use super::types::OrchestratorError;

impl OrchestratorError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn no_provider_available<S: Into<String>>(category: S) -> Self {
        Self::NoProviderAvailable(category.into())
    }

    pub fn unknown_provider<S: Into<String>>(name: S) -> Self {
        Self::UnknownProvider(name.into())
    }

    pub fn provider_request_failed<P: Into<String>, E: Into<String>>(
        provider: P,
        last_error: E,
    ) -> Self {
        Self::ProviderRequestFailed {
            provider: provider.into(),
            last_error: last_error.into(),
        }
    }

    pub fn health_check_timeout<S: Into<String>>(provider: S, timeout_ms: u64) -> Self {
        Self::HealthCheckTimeout {
            provider: provider.into(),
            timeout_ms,
        }
    }

    /// The provider-level message carried by request failures
    ///
    /// For `ProviderRequestFailed` this is the last error verbatim; every other
    /// variant falls back to its display text.
    pub fn provider_message(&self) -> String {
        match self {
            Self::ProviderRequestFailed { last_error, .. } => last_error.clone(),
            other => other.to_string(),
        }
    }
}
