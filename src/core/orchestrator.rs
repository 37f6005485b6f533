//! Orchestrator wiring
//!
//! Builds the registry, telemetry recorder, resilient client and health
//! checker from one [`Config`] and exposes the operations callers need.

use crate::config::Config;
use crate::core::client::{
    ChatMessage, ChatResponse, HttpTransport, ImageResponse, ReqwestTransport, ResilientClient,
    RetryPolicy, RoutedResponse,
};
use crate::core::providers::{CredentialResolver, EnvCredentials, ProviderRegistry};
use crate::monitoring::health::{HealthChecker, SystemHealth};
use crate::monitoring::telemetry::{ProviderStats, TelemetryRecorder};
use crate::server::AppState;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Entry point tying providers, retries, health and telemetry together
#[derive(Clone)]
pub struct Orchestrator {
    config: Arc<Config>,
    registry: Arc<ProviderRegistry>,
    telemetry: Arc<TelemetryRecorder>,
    client: Arc<ResilientClient>,
    health: HealthChecker,
}

impl Orchestrator {
    /// Production wiring: environment credentials and a `reqwest` transport
    pub fn from_config(config: Config) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config.http)?);
        Ok(Self::with_parts(config, Arc::new(EnvCredentials), transport))
    }

    /// Wire with explicit credential and transport implementations
    pub fn with_parts(
        config: Config,
        credentials: Arc<dyn CredentialResolver>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let registry = Arc::new(ProviderRegistry::new(&config.providers, credentials));
        let telemetry = Arc::new(TelemetryRecorder::from_config(&config.telemetry));
        let client = Arc::new(
            ResilientClient::new(
                Arc::clone(&transport),
                Arc::clone(&telemetry),
                RetryPolicy::from_config(&config.retry),
            )
            .with_attempt_timeout(Duration::from_secs(config.http.request_timeout_secs)),
        );
        let health = HealthChecker::from_config(
            &config.health,
            Arc::clone(&registry),
            transport,
            Arc::clone(&telemetry),
        );
        debug!(?registry, "Orchestrator wired");

        Self {
            config: Arc::new(config),
            registry,
            telemetry,
            client,
            health,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    pub fn telemetry(&self) -> &Arc<TelemetryRecorder> {
        &self.telemetry
    }

    pub fn client(&self) -> &ResilientClient {
        &self.client
    }

    /// Run the startup probe unless disabled in configuration
    pub async fn startup_health_check(&self) -> Option<SystemHealth> {
        if !self.config.health.enabled {
            info!("Startup health check disabled");
            return None;
        }
        Some(self.health.check_registry().await)
    }

    /// Text generation with primary/fallback routing
    pub async fn generate_text(
        &self,
        function_name: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<RoutedResponse<ChatResponse>> {
        self.client
            .generate_text(&self.registry, function_name, messages)
            .await
    }

    /// Image generation against the image provider
    pub async fn generate_image(
        &self,
        function_name: &str,
        prompt: &str,
    ) -> Result<RoutedResponse<ImageResponse>> {
        self.client
            .generate_image(&self.registry, function_name, prompt)
            .await
    }

    /// Stats over `window`, or over the configured default window if `None`
    pub fn stats(&self, window: Option<Duration>) -> Vec<ProviderStats> {
        let window = window.or(Some(Duration::from_millis(
            self.config.telemetry.default_window_ms,
        )));
        self.telemetry.windowed_stats(window)
    }

    /// State handed to the HTTP server
    pub fn app_state(&self, startup_health: Option<SystemHealth>) -> AppState {
        let state = AppState::new(
            Arc::clone(&self.config),
            Arc::clone(&self.registry),
            Arc::clone(&self.telemetry),
        );
        match startup_health {
            Some(health) => state.with_startup_health(health),
            None => state,
        }
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("registry", &self.registry)
            .field("client", &self.client)
            .field("health", &self.health)
            .finish()
    }
}
