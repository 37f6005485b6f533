//! HTTP transport seam
//!
//! The resilient client and the health checker only see [`HttpTransport`];
//! production uses [`ReqwestTransport`], tests substitute scripted transports.

use crate::config::HttpConfig;
use crate::utils::error::{OrchestratorError, Result, TransportError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Status code and raw body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues HTTP requests on behalf of the orchestration layer
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST a JSON body
    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &serde_json::Value,
        timeout: Option<Duration>,
    ) -> std::result::Result<TransportResponse, TransportError>;

    /// Plain GET
    async fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
        timeout: Option<Duration>,
    ) -> std::result::Result<TransportResponse, TransportError>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| {
                OrchestratorError::Config(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn send(
        &self,
        mut builder: reqwest::RequestBuilder,
        headers: &[(String, String)],
        timeout: Option<Duration>,
    ) -> std::result::Result<TransportResponse, TransportError> {
        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &serde_json::Value,
        timeout: Option<Duration>,
    ) -> std::result::Result<TransportResponse, TransportError> {
        self.send(self.client.post(url).json(body), headers, timeout)
            .await
    }

    async fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
        timeout: Option<Duration>,
    ) -> std::result::Result<TransportResponse, TransportError> {
        self.send(self.client.get(url), headers, timeout).await
    }
}
