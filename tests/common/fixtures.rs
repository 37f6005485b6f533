//! Test fixtures and mock providers

use serde_json::json;
use std::sync::Arc;
use storyweave_ai::{Config, Orchestrator, ReqwestTransport, StaticCredentials};
use wiremock::MockServer;

/// Mock server standing in for all three providers
pub struct MockProviders {
    pub server: MockServer,
}

impl MockProviders {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Default configuration pointed at the mock server with fast retries
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.providers.text.primary.base_url = format!("{}/openai", self.server.uri());
        config.providers.text.fallback.base_url = format!("{}/openrouter", self.server.uri());
        config.providers.image.base_url = format!("{}/together", self.server.uri());
        config.retry.max_retries = 2;
        config.retry.base_delay_ms = 5;
        config.retry.max_delay_ms = 20;
        config.health.timeout_ms = 500;
        config
    }

    pub fn credentials() -> StaticCredentials {
        StaticCredentials::new()
            .with("openai", "sk-test")
            .with("openrouter", "or-test")
            .with("together", "tg-test")
    }

    pub fn orchestrator(&self, config: Config, credentials: StaticCredentials) -> Orchestrator {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("Failed to create HTTP client");
        Orchestrator::with_parts(
            config,
            Arc::new(credentials),
            Arc::new(ReqwestTransport::with_client(client)),
        )
    }

    /// Requests received under one path
    pub async fn hits(&self, request_path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == request_path)
            .count()
    }
}

pub fn chat_completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test123",
        "object": "chat.completion",
        "created": 1704067200,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
    })
}

pub fn image_body(url: &str) -> serde_json::Value {
    json!({"created": 1704067200, "data": [{"url": url}]})
}
