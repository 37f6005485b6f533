//! Telemetry event and statistics types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome recorded for one provider call, retry or probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TelemetryStatus {
    Success,
    Failure,
    Fallback,
    Retry,
}

impl TelemetryStatus {
    /// Whether this status ends a timer's life
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TelemetryStatus::Retry)
    }
}

impl std::fmt::Display for TelemetryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TelemetryStatus::Success => "success",
            TelemetryStatus::Failure => "failure",
            TelemetryStatus::Fallback => "fallback",
            TelemetryStatus::Retry => "retry",
        };
        f.write_str(s)
    }
}

/// Immutable record of a single outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub timestamp: DateTime<Utc>,
    /// Logical call-site tag
    pub function_name: String,
    pub provider: String,
    pub status: TelemetryStatus,
    pub response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_usage: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl TelemetryEvent {
    pub fn new(
        function_name: impl Into<String>,
        provider: impl Into<String>,
        status: TelemetryStatus,
        response_time_ms: u64,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            function_name: function_name.into(),
            provider: provider.into(),
            status,
            response_time_ms,
            token_usage: None,
            error_message: None,
        }
    }

    pub fn with_token_usage(mut self, tokens: Option<u64>) -> Self {
        self.token_usage = tokens;
        self
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Reliability statistics for one provider over a window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderStats {
    pub provider: String,
    /// Events of every status
    pub total_calls: u64,
    pub success_count: u64,
    pub failure_count: u64,
    pub fallback_count: u64,
    pub retry_count: u64,
    pub average_response_time_ms: f64,
    pub total_tokens: u64,
    /// `success_count / total_calls` as a percentage, two decimals
    pub success_rate: f64,
}
