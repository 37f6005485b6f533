//! # Storyweave AI
//!
//! Resilient orchestration of third-party AI inference providers for story and
//! illustration generation.
//!
//! ## Features
//!
//! - **Provider routing**: primary/fallback text providers and a single image
//!   provider, chosen by credential availability on every call
//! - **Retry with backoff**: bounded exponential backoff for transient errors,
//!   immediate stop on fatal ones
//! - **Fallback**: one hop to the secondary provider with an adapted payload
//! - **Startup health**: concurrent, timeout-bounded liveness probes
//! - **Telemetry**: bounded in-memory event buffer with windowed per-provider
//!   statistics
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use storyweave_ai::{ChatMessage, Config, Orchestrator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None).await?;
//!     let orchestrator = Orchestrator::from_config(config)?;
//!
//!     if let Some(health) = orchestrator.startup_health_check().await {
//!         println!("providers: {}", health.status);
//!     }
//!
//!     let routed = orchestrator
//!         .generate_text(
//!             "generate_story",
//!             vec![
//!                 ChatMessage::system("You write short bedtime stories."),
//!                 ChatMessage::user("A fox who collects lost kites."),
//!             ],
//!         )
//!         .await?;
//!     println!("{} said: {:?}", routed.provider.name, routed.response.content());
//!
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod monitoring;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::Orchestrator;
pub use core::client::{
    ChatMessage, ChatRequest, ChatResponse, ErrorClass, HttpTransport, ImageRequest,
    ImageResponse, InferencePayload, ReqwestTransport, ResilientClient, RetryPolicy,
    RoutedResponse, TransportResponse, classify,
};
pub use core::providers::{
    AuthScheme, CredentialResolver, EnvCredentials, Provider, ProviderKind, ProviderRegistry,
    ProviderTargets, StaticCredentials,
};
pub use monitoring::health::{HealthCheckResult, HealthChecker, OverallHealth, SystemHealth};
pub use monitoring::telemetry::{
    PerformanceTimer, ProviderStats, TelemetryEvent, TelemetryRecorder, TelemetryStatus,
};
pub use utils::error::{OrchestratorError, Result, TransportError};
pub use utils::logging::init_logging;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
