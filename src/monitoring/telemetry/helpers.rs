//! Aggregation of telemetry events into provider statistics

use super::types::{ProviderStats, TelemetryEvent, TelemetryStatus};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::time::Duration;

/// Round to two decimal places
pub(super) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Default)]
struct Accumulator {
    total: u64,
    success: u64,
    failure: u64,
    fallback: u64,
    retry: u64,
    response_time_sum: u64,
    tokens: u64,
}

/// Group events by provider and compute statistics
///
/// Only events with `timestamp > now - window` are counted; `None` counts
/// everything. Output is ordered by provider name. Pure: the caller supplies
/// both the events and the clock.
pub fn aggregate_provider_stats<'a, I>(
    events: I,
    now: DateTime<Utc>,
    window: Option<Duration>,
) -> Vec<ProviderStats>
where
    I: IntoIterator<Item = &'a TelemetryEvent>,
{
    let cutoff = window.and_then(|window| {
        chrono::Duration::from_std(window)
            .ok()
            .and_then(|window| now.checked_sub_signed(window))
    });

    let mut by_provider: BTreeMap<&str, Accumulator> = BTreeMap::new();

    for event in events {
        if cutoff.is_some_and(|cutoff| event.timestamp <= cutoff) {
            continue;
        }

        let acc = by_provider.entry(event.provider.as_str()).or_default();
        acc.total += 1;
        acc.response_time_sum += event.response_time_ms;
        acc.tokens += event.token_usage.unwrap_or(0);
        match event.status {
            TelemetryStatus::Success => acc.success += 1,
            TelemetryStatus::Failure => acc.failure += 1,
            TelemetryStatus::Fallback => acc.fallback += 1,
            TelemetryStatus::Retry => acc.retry += 1,
        }
    }

    by_provider
        .into_iter()
        .map(|(provider, acc)| ProviderStats {
            provider: provider.to_string(),
            total_calls: acc.total,
            success_count: acc.success,
            failure_count: acc.failure,
            fallback_count: acc.fallback,
            retry_count: acc.retry,
            average_response_time_ms: acc.response_time_sum as f64 / acc.total as f64,
            total_tokens: acc.tokens,
            success_rate: round2(acc.success as f64 / acc.total as f64 * 100.0),
        })
        .collect()
}
