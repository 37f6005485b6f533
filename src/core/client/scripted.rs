//! In-memory transport replaying canned responses per URL

use super::transport::{HttpTransport, TransportResponse};
use crate::utils::error::TransportError;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

#[derive(Debug, Clone)]
pub(crate) enum Scripted {
    Respond(TransportResponse),
    Fail(TransportError),
    Stall(Duration, TransportResponse),
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub timeout: Option<Duration>,
}

impl RecordedCall {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    scripts: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(self, url: &str, step: Scripted) -> Self {
        self.scripts
            .lock()
            .entry(url.to_string())
            .or_default()
            .push_back(step);
        self
    }

    pub fn respond(self, url: &str, status: u16, body: &str) -> Self {
        self.push(url, Scripted::Respond(TransportResponse::new(status, body)))
    }

    pub fn fail(self, url: &str, error: TransportError) -> Self {
        self.push(url, Scripted::Fail(error))
    }

    pub fn stall(self, url: &str, delay: Duration, status: u16) -> Self {
        self.push(url, Scripted::Stall(delay, TransportResponse::new(status, "")))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.lock().iter().filter(|call| call.url == url).count()
    }

    async fn play(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: Option<&serde_json::Value>,
        timeout: Option<Duration>,
    ) -> Result<TransportResponse, TransportError> {
        self.calls.lock().push(RecordedCall {
            url: url.to_string(),
            headers: headers.to_vec(),
            body: body.cloned(),
            timeout,
        });

        let step = self
            .scripts
            .lock()
            .get_mut(url)
            .and_then(VecDeque::pop_front);

        match step {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(error)) => Err(error),
            Some(Scripted::Stall(delay, response)) => {
                tokio::time::sleep(delay).await;
                Ok(response)
            }
            None => Err(TransportError::Connection(format!(
                "no scripted response for {}",
                url
            ))),
        }
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &serde_json::Value,
        timeout: Option<Duration>,
    ) -> Result<TransportResponse, TransportError> {
        self.play(url, headers, Some(body), timeout).await
    }

    async fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
        timeout: Option<Duration>,
    ) -> Result<TransportResponse, TransportError> {
        self.play(url, headers, None, timeout).await
    }
}
