//! Core error types for the orchestration layer

use thiserror::Error;

/// Result type alias for the orchestration layer
pub type Result<T> = std::result::Result<T, OrchestratorError>;

/// Main error type for the orchestration layer
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No candidate provider has a usable credential
    #[error("No provider available for {0}")]
    NoProviderAvailable(String),

    /// Provider name matches no known auth scheme
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// A single provider exhausted its attempts
    #[error("Provider {provider} request failed: {last_error}")]
    ProviderRequestFailed { provider: String, last_error: String },

    /// Primary and fallback both exhausted their attempts
    #[error(
        "All providers failed. Primary ({primary}): {primary_error}. Fallback ({fallback}): {fallback_error}"
    )]
    AllProvidersFailed {
        primary: String,
        primary_error: String,
        fallback: String,
        fallback_error: String,
    },

    /// A health probe exceeded its bound
    #[error("Health check for {provider} timed out after {timeout_ms}ms")]
    HealthCheckTimeout { provider: String, timeout_ms: u64 },
}

/// Failure of a single HTTP exchange, before classification
///
/// The `Display` text is what the retry classifier inspects, so each variant
/// keeps the vocabulary ("timeout", "connection", "network") the classifier
/// matches on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Network connection error: {0}")]
    Connection(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}
