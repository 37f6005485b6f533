//! Request telemetry
//!
//! An append-only, bounded, in-memory log of provider call outcomes plus
//! on-demand aggregation into per-provider reliability statistics. One
//! [`TelemetryRecorder`] is constructed per process and shared by `Arc`;
//! tests construct their own isolated instances.

mod bounded;
mod helpers;
mod recorder;
mod timer;
mod types;

pub use helpers::aggregate_provider_stats;
pub use recorder::TelemetryRecorder;
pub use timer::PerformanceTimer;
pub use types::{ProviderStats, TelemetryEvent, TelemetryStatus};
