//! Performance timer bound to one provider call

use super::recorder::TelemetryRecorder;
use super::types::{TelemetryEvent, TelemetryStatus};
use std::sync::Arc;
use std::time::Instant;

/// Short-lived handle measuring one logical call against one provider
///
/// Terminal outcomes (`success`, `failure`, `fallback`) consume the timer, so
/// each can be recorded at most once. `retry` borrows it and may be called any
/// number of times before the terminal outcome.
#[derive(Debug)]
pub struct PerformanceTimer {
    recorder: Arc<TelemetryRecorder>,
    function_name: String,
    provider: String,
    started: Instant,
}

impl PerformanceTimer {
    /// Capture a monotonic baseline
    pub fn start(
        recorder: Arc<TelemetryRecorder>,
        function_name: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            recorder,
            function_name: function_name.into(),
            provider: provider.into(),
            started: Instant::now(),
        }
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Milliseconds since `start`
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn event(&self, status: TelemetryStatus) -> TelemetryEvent {
        TelemetryEvent::new(
            self.function_name.clone(),
            self.provider.clone(),
            status,
            self.elapsed_ms(),
        )
    }

    /// Interim signal: attempt `attempt` failed and will be retried
    pub fn retry(&self, attempt: u32) {
        self.recorder.record(
            self.event(TelemetryStatus::Retry)
                .with_error(format!("retry attempt {}", attempt)),
        );
    }

    pub fn success(self, token_usage: Option<u64>) {
        self.recorder
            .record(self.event(TelemetryStatus::Success).with_token_usage(token_usage));
    }

    pub fn failure(self, error: &str) {
        self.recorder
            .record(self.event(TelemetryStatus::Failure).with_error(error));
    }

    pub fn fallback(self, error: &str) {
        self.recorder
            .record(self.event(TelemetryStatus::Fallback).with_error(error));
    }
}
