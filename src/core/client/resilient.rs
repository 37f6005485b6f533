//! Retrying, telemetry-aware request execution with single-hop fallback

use super::retry::{ErrorClass, RetryPolicy, classify};
use super::transport::HttpTransport;
use super::types::{ChatMessage, ChatRequest, ChatResponse, ImageRequest, ImageResponse, InferencePayload};
use crate::core::providers::{Provider, ProviderRegistry};
use crate::monitoring::telemetry::TelemetryRecorder;
use crate::utils::error::{OrchestratorError, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Longest slice of a provider error body kept in attempt errors
const ERROR_BODY_EXCERPT: usize = 200;

/// Response together with the provider that actually produced it
#[derive(Debug, Clone)]
pub struct RoutedResponse<T> {
    pub response: T,
    pub provider: Arc<Provider>,
    pub used_fallback: bool,
}

/// Executes provider requests under the retry policy and records telemetry
pub struct ResilientClient {
    transport: Arc<dyn HttpTransport>,
    telemetry: Arc<TelemetryRecorder>,
    policy: RetryPolicy,
    attempt_timeout: Option<Duration>,
}

impl ResilientClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        telemetry: Arc<TelemetryRecorder>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            telemetry,
            policy,
            attempt_timeout: None,
        }
    }

    /// Per-attempt timeout passed down to the transport
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = Some(timeout);
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn telemetry(&self) -> &Arc<TelemetryRecorder> {
        &self.telemetry
    }

    /// One HTTP exchange; any failure comes back as its textual description
    async fn attempt<P: InferencePayload>(
        &self,
        provider: &Provider,
        payload: &P,
        auth_header: &str,
    ) -> std::result::Result<P::Response, String> {
        let body = serde_json::to_value(payload)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;
        let headers = [
            ("Authorization".to_string(), auth_header.to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ];

        let response = self
            .transport
            .post_json(
                &provider.endpoint(P::ENDPOINT),
                &headers,
                &body,
                self.attempt_timeout,
            )
            .await
            .map_err(|e| e.to_string())?;

        if !response.is_success() {
            let excerpt: String = response.body.chars().take(ERROR_BODY_EXCERPT).collect();
            return Err(format!("HTTP {}: {}", response.status, excerpt));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| format!("Invalid response body from {}: {}", provider.name, e))
    }

    /// Run the attempt/backoff state machine against one provider
    ///
    /// Records one retry event per scheduled retry and exactly one terminal
    /// event (success or failure). A fatal error or an exhausted budget ends
    /// the loop with [`OrchestratorError::ProviderRequestFailed`] carrying the
    /// last attempt error verbatim.
    pub async fn request<P: InferencePayload>(
        &self,
        function_name: &str,
        provider: &Provider,
        payload: &P,
        auth_header: &str,
    ) -> Result<P::Response> {
        let timer = self.telemetry.start_timer(function_name, &provider.name);
        let mut retries: u32 = 0;

        loop {
            match self.attempt(provider, payload, auth_header).await {
                Ok(response) => {
                    debug!(
                        provider = %provider.name,
                        function = function_name,
                        retries,
                        "Provider request succeeded"
                    );
                    timer.success(P::token_usage(&response));
                    return Ok(response);
                }
                Err(attempt_error) => {
                    let class = classify(&attempt_error);
                    if class == ErrorClass::Fatal || retries >= self.policy.max_retries {
                        error!(
                            provider = %provider.name,
                            function = function_name,
                            attempts = retries + 1,
                            error = %attempt_error,
                            "Provider request failed"
                        );
                        timer.failure(&attempt_error);
                        return Err(OrchestratorError::provider_request_failed(
                            &provider.name,
                            attempt_error,
                        ));
                    }

                    retries += 1;
                    let delay = self.policy.delay_for_retry(retries);
                    warn!(
                        provider = %provider.name,
                        function = function_name,
                        retry = retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %attempt_error,
                        "Retrying provider request"
                    );
                    timer.retry(retries);
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Try `primary`, and on failure hand the adapted payload to `fallback`
    ///
    /// Fallback is a single hop. When it happens a fallback event is recorded
    /// against the primary, timed from the start of this call. When both fail
    /// the combined error names both providers with their own messages.
    pub async fn request_with_fallback<P, F>(
        &self,
        function_name: &str,
        primary: &Arc<Provider>,
        fallback: &Arc<Provider>,
        payload: &P,
        auth_for: F,
    ) -> Result<RoutedResponse<P::Response>>
    where
        P: InferencePayload,
        F: Fn(&Provider) -> Result<String>,
    {
        let fallback_timer = self.telemetry.start_timer(function_name, &primary.name);

        let primary_result = match auth_for(primary) {
            Ok(header) => self.request(function_name, primary, payload, &header).await,
            Err(e) => Err(e),
        };
        let primary_error = match primary_result {
            Ok(response) => {
                return Ok(RoutedResponse {
                    response,
                    provider: Arc::clone(primary),
                    used_fallback: false,
                });
            }
            Err(e) => e.provider_message(),
        };

        warn!(
            primary = %primary.name,
            fallback = %fallback.name,
            function = function_name,
            error = %primary_error,
            "Primary provider failed, switching to fallback"
        );
        fallback_timer.fallback(&primary_error);

        let adapted = payload.adapt_to(fallback);
        let fallback_result = match auth_for(fallback) {
            Ok(header) => self.request(function_name, fallback, &adapted, &header).await,
            Err(e) => Err(e),
        };

        match fallback_result {
            Ok(response) => Ok(RoutedResponse {
                response,
                provider: Arc::clone(fallback),
                used_fallback: true,
            }),
            Err(e) => Err(OrchestratorError::AllProvidersFailed {
                primary: primary.name.clone(),
                primary_error,
                fallback: fallback.name.clone(),
                fallback_error: e.provider_message(),
            }),
        }
    }

    /// Chat completion through the registry's text providers
    pub async fn generate_text(
        &self,
        registry: &ProviderRegistry,
        function_name: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<RoutedResponse<ChatResponse>> {
        let primary = registry.text_primary();
        let request = ChatRequest::for_provider(primary, messages);
        self.request_with_fallback(
            function_name,
            primary,
            registry.text_fallback(),
            &request,
            |provider| registry.auth_header(provider),
        )
        .await
    }

    /// Image generation through the registry's image provider
    pub async fn generate_image(
        &self,
        registry: &ProviderRegistry,
        function_name: &str,
        prompt: &str,
    ) -> Result<RoutedResponse<ImageResponse>> {
        let provider = registry.select_image_provider()?;
        let auth_header = registry.auth_header(&provider)?;
        let request = ImageRequest::for_provider(&provider, prompt);
        let response = self
            .request(function_name, &provider, &request, &auth_header)
            .await?;

        Ok(RoutedResponse {
            response,
            provider,
            used_fallback: false,
        })
    }
}

impl std::fmt::Debug for ResilientClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResilientClient")
            .field("policy", &self.policy)
            .field("attempt_timeout", &self.attempt_timeout)
            .finish()
    }
}
