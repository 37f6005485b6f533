//! Reliability monitoring
//!
//! - **telemetry**: bounded per-call event buffer and windowed aggregation
//! - **health**: concurrent startup probes against every provider

pub mod health;
pub mod telemetry;
