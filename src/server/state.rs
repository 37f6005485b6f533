//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::providers::ProviderRegistry;
use crate::monitoring::health::SystemHealth;
use crate::monitoring::telemetry::TelemetryRecorder;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything is behind `Arc`; the registry and recorder are the same
/// instances the orchestration layer uses.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<ProviderRegistry>,
    pub telemetry: Arc<TelemetryRecorder>,
    /// Snapshot taken at startup, absent when the probe is disabled
    pub startup_health: Option<Arc<SystemHealth>>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        registry: Arc<ProviderRegistry>,
        telemetry: Arc<TelemetryRecorder>,
    ) -> Self {
        Self {
            config,
            registry,
            telemetry,
            startup_health: None,
        }
    }

    pub fn with_startup_health(mut self, health: SystemHealth) -> Self {
        self.startup_health = Some(Arc::new(health));
        self
    }
}
