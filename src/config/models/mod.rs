//! Configuration data models
//!
//! This module defines all configuration structures used by the orchestration layer.

#![allow(missing_docs)]

pub mod monitoring;
pub mod provider;
pub mod retry;
pub mod server;

// Re-export all configuration types
pub use monitoring::*;
pub use provider::*;
pub use retry::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8088
}

/// Default maximum retry attempts after the first call
pub fn default_max_retries() -> u32 {
    3
}

/// Default backoff base delay in milliseconds
pub fn default_base_delay_ms() -> u64 {
    1_000
}

/// Default backoff ceiling in milliseconds
pub fn default_max_delay_ms() -> u64 {
    10_000
}

pub fn default_backoff_multiplier() -> f64 {
    2.0
}

/// Default telemetry buffer capacity
pub fn default_telemetry_capacity() -> usize {
    1_000
}

/// Default stats window (one hour)
pub fn default_window_ms() -> u64 {
    3_600_000
}

/// Default per-probe health check timeout
pub fn default_health_timeout_ms() -> u64 {
    5_000
}

pub fn default_request_timeout_secs() -> u64 {
    60
}

pub fn default_connect_timeout_secs() -> u64 {
    10
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
