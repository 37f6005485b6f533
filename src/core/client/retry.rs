//! Retry policy and error classification

use crate::config::RetryConfig;
use std::time::Duration;

/// Whether a failed attempt may be retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Retryable,
    Fatal,
}

const RETRYABLE_SIGNALS: &[&str] = &[
    "429",
    "rate limit",
    "502",
    "503",
    "504",
    "timeout",
    "network",
    "connection",
];

/// Classify an attempt error by its text
///
/// Case-insensitive substring match. Anything that does not look transient is
/// fatal, including auth (401/403) and client (400/404) errors and any message
/// nobody anticipated.
pub fn classify(error: &str) -> ErrorClass {
    let error = error.to_lowercase();
    if RETRYABLE_SIGNALS
        .iter()
        .any(|signal| error.contains(signal))
    {
        ErrorClass::Retryable
    } else {
        ErrorClass::Fatal
    }
}

/// Immutable attempt/backoff policy
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
}

impl RetryPolicy {
    pub fn new(
        max_retries: u32,
        base_delay: Duration,
        max_delay: Duration,
        backoff_multiplier: f64,
    ) -> Self {
        Self {
            max_retries,
            base_delay,
            max_delay,
            backoff_multiplier,
        }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(
            config.max_retries,
            Duration::from_millis(config.base_delay_ms),
            Duration::from_millis(config.max_delay_ms),
            config.backoff_multiplier,
        )
    }

    /// Single attempt, no backoff
    pub fn no_retries() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Total attempts a single provider may receive
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay before retry `retry` (1-indexed)
    ///
    /// `min(base_delay * backoff_multiplier^(retry - 1), max_delay)`
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let exponent = i32::try_from(retry.saturating_sub(1)).unwrap_or(i32::MAX);
        let nanos = self.base_delay.as_nanos() as f64 * self.backoff_multiplier.powi(exponent);

        if !nanos.is_finite() || nanos >= self.max_delay.as_nanos() as f64 {
            return self.max_delay;
        }
        Duration::from_nanos(nanos.round() as u64)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}
