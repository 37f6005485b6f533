//! Core orchestration logic
//!
//! Provider descriptors and selection live in [`providers`]; request
//! execution with retry and fallback lives in [`client`]. [`Orchestrator`]
//! wires both to health checking and telemetry.

pub mod client;
pub mod orchestrator;
pub mod providers;

pub use orchestrator::Orchestrator;
