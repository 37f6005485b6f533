//! Storyweave AI - provider orchestration service
//!
//! Loads configuration, probes every provider at startup, reports telemetry
//! and optionally serves the operational HTTP endpoints.

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use storyweave_ai::server::HttpServer;
use storyweave_ai::{Config, Orchestrator, init_logging};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "storyweave", version, about = "Resilient AI provider orchestration")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "STORYWEAVE_CONFIG")]
    config: Option<PathBuf>,

    /// Serve the operational HTTP endpoints after the startup check
    #[arg(long)]
    serve: bool,

    /// Telemetry window for the startup stats report, in milliseconds
    #[arg(long)]
    window_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())
        .await
        .context("loading configuration")?;
    init_logging(&config.logging).context("initializing logging")?;

    info!("Starting Storyweave AI v{}", storyweave_ai::VERSION);
    let serve = cli.serve || config.server.enabled;
    let server_config = config.server.clone();

    let orchestrator = Orchestrator::from_config(config).context("building orchestrator")?;
    match orchestrator.registry().routing() {
        Ok(decision) => info!(
            text = %decision.text.name,
            image = %decision.image.name,
            "Routing decision"
        ),
        Err(e) => warn!(error = %e, "No complete routing decision available"),
    }

    let startup_health = orchestrator.startup_health_check().await;
    if let Some(health) = &startup_health {
        info!(
            status = %health.status,
            healthy = health.summary.healthy,
            total = health.summary.total,
            "Provider health"
        );
    }

    for stats in orchestrator.stats(cli.window_ms.map(Duration::from_millis)) {
        info!(
            provider = %stats.provider,
            calls = stats.total_calls,
            success_rate = stats.success_rate,
            avg_ms = stats.average_response_time_ms,
            "Provider stats"
        );
    }

    if serve {
        let state = orchestrator.app_state(startup_health);
        HttpServer::new(server_config, state)
            .start()
            .await
            .context("running HTTP server")?;
    }

    Ok(())
}
