//! Telemetry recorder implementation

use super::bounded::{BoundedPush, DEFAULT_CAPACITY};
use super::helpers::aggregate_provider_stats;
use super::timer::PerformanceTimer;
use super::types::{ProviderStats, TelemetryEvent};
use crate::config::TelemetryConfig;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// Bounded FIFO log of telemetry events
///
/// Appends and clears take the write lock, so FIFO order and the length bound
/// hold under concurrent recording. Stats are computed while holding the read
/// lock and therefore see a point-in-time view of the buffer.
#[derive(Debug)]
pub struct TelemetryRecorder {
    capacity: usize,
    events: RwLock<VecDeque<TelemetryEvent>>,
}

impl TelemetryRecorder {
    /// Create a recorder retaining at most `capacity` events
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            events: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn from_config(config: &TelemetryConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Append an event, evicting the oldest when full
    ///
    /// In-memory only; never awaits anything.
    pub fn record(&self, event: TelemetryEvent) {
        trace!(
            provider = %event.provider,
            function = %event.function_name,
            status = %event.status,
            response_time_ms = event.response_time_ms,
            "Telemetry event recorded"
        );
        self.events.write().push_bounded(event, self.capacity);
    }

    /// Start a timer bound to one provider and one logical call
    pub fn start_timer(
        self: &Arc<Self>,
        function_name: impl Into<String>,
        provider: impl Into<String>,
    ) -> PerformanceTimer {
        PerformanceTimer::start(Arc::clone(self), function_name, provider)
    }

    /// Per-provider stats over events newer than `now - window`
    ///
    /// `None` aggregates the whole buffer.
    pub fn windowed_stats(&self, window: Option<Duration>) -> Vec<ProviderStats> {
        let events = self.events.read();
        aggregate_provider_stats(events.iter(), chrono::Utc::now(), window)
    }

    /// Stats for a single provider, if it has events in the window
    pub fn provider_stats(&self, provider: &str, window: Option<Duration>) -> Option<ProviderStats> {
        self.windowed_stats(window)
            .into_iter()
            .find(|stats| stats.provider == provider)
    }

    /// Copy of the buffer, oldest first
    pub fn snapshot(&self) -> Vec<TelemetryEvent> {
        self.events.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every buffered event
    pub fn clear(&self) {
        self.events.write().clear();
    }
}

impl Default for TelemetryRecorder {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
