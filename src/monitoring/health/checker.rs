//! Startup provider health checker

use crate::config::HealthConfig;
use crate::core::client::HttpTransport;
use crate::core::providers::{Provider, ProviderRegistry, ProviderTargets};
use crate::monitoring::telemetry::TelemetryRecorder;
use crate::utils::error::OrchestratorError;
use futures::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::types::{HealthCheckResult, SystemHealth};

/// Function name recorded on probe telemetry
pub const HEALTH_CHECK_FUNCTION: &str = "startup_health_check";

/// Error reported for a provider whose credential is absent or a placeholder
pub const CREDENTIAL_NOT_CONFIGURED: &str = "credential not configured";

/// Probes every configured provider concurrently
#[derive(Clone)]
pub struct HealthChecker {
    registry: Arc<ProviderRegistry>,
    transport: Arc<dyn HttpTransport>,
    telemetry: Arc<TelemetryRecorder>,
    timeout: Duration,
}

impl HealthChecker {
    pub fn new(
        registry: Arc<ProviderRegistry>,
        transport: Arc<dyn HttpTransport>,
        telemetry: Arc<TelemetryRecorder>,
        timeout: Duration,
    ) -> Self {
        Self {
            registry,
            transport,
            telemetry,
            timeout,
        }
    }

    pub fn from_config(
        config: &HealthConfig,
        registry: Arc<ProviderRegistry>,
        transport: Arc<dyn HttpTransport>,
        telemetry: Arc<TelemetryRecorder>,
    ) -> Self {
        Self::new(
            registry,
            transport,
            telemetry,
            Duration::from_millis(config.timeout_ms),
        )
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Probe every provider the registry knows about
    pub async fn check_registry(&self) -> SystemHealth {
        self.perform_startup_health_check(&self.registry.health_targets())
            .await
    }

    /// Probe `targets` in parallel and classify the result
    ///
    /// Wall time is bounded by the slowest probe, which in turn is bounded by
    /// the configured timeout. A probe that hangs or panics only affects its
    /// own entry.
    pub async fn perform_startup_health_check(&self, targets: &ProviderTargets) -> SystemHealth {
        debug!(providers = targets.len(), "Running startup health check");

        let providers: Vec<Arc<Provider>> = targets.iter().cloned().collect();
        let handles = providers.iter().map(|provider| {
            let checker = self.clone();
            let provider = Arc::clone(provider);
            tokio::spawn(async move { checker.probe(&provider).await })
        });
        let joined = join_all(handles).await;

        let results: Vec<HealthCheckResult> = providers
            .iter()
            .zip(joined)
            .map(|(provider, outcome)| {
                outcome.unwrap_or_else(|e| HealthCheckResult {
                    provider: provider.name.clone(),
                    kind: provider.kind,
                    healthy: false,
                    latency_ms: 0,
                    status_code: None,
                    error: Some(format!("Health probe aborted: {}", e)),
                })
            })
            .collect();

        let health = SystemHealth::from_results(results);
        for result in health.unhealthy_providers() {
            warn!(
                provider = %result.provider,
                kind = %result.kind,
                error = result.error.as_deref().unwrap_or("unknown"),
                "Provider failed health check"
            );
        }
        info!(
            status = %health.status,
            healthy = health.summary.healthy,
            total = health.summary.total,
            "Startup health check complete"
        );

        health
    }

    /// Probe one provider and record the outcome
    async fn probe(&self, provider: &Provider) -> HealthCheckResult {
        let timer = self
            .telemetry
            .start_timer(HEALTH_CHECK_FUNCTION, &provider.name);
        let started = Instant::now();

        let (status_code, error) = match self.liveness(provider).await {
            Ok(status) if is_healthy_status(status) => (Some(status), None),
            Ok(status) => (Some(status), Some(format!("HTTP {}", status))),
            Err(e) => (None, Some(e)),
        };
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &error {
            None => timer.success(None),
            Some(message) => timer.failure(message),
        }

        HealthCheckResult {
            provider: provider.name.clone(),
            kind: provider.kind,
            healthy: error.is_none(),
            latency_ms,
            status_code,
            error,
        }
    }

    /// Issue the liveness request under the probe timeout
    async fn liveness(&self, provider: &Provider) -> std::result::Result<u16, String> {
        if !self.registry.is_available(provider) {
            return Err(CREDENTIAL_NOT_CONFIGURED.to_string());
        }
        let auth_header = self
            .registry
            .auth_header(provider)
            .map_err(|e| e.to_string())?;
        let headers = [("Authorization".to_string(), auth_header)];

        // The probe deadline is owned by `tokio::time::timeout`, not the client
        let url = provider.health_url();
        let request = self.transport.get(&url, &headers, None);
        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(response)) => Ok(response.status),
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => Err(OrchestratorError::health_check_timeout(
                &provider.name,
                u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            )
            .to_string()),
        }
    }
}

/// Any response other than a server error or an auth rejection counts
pub fn is_healthy_status(status: u16) -> bool {
    status < 500 && status != 401 && status != 403
}

impl std::fmt::Debug for HealthChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthChecker")
            .field("registry", &self.registry)
            .field("timeout", &self.timeout)
            .finish()
    }
}
