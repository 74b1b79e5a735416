use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use elle_dashboard::app::Dashboard;
use elle_dashboard::config::{Cli, DashboardConfig};
use elle_dashboard::runtime;
use elle_dashboard::scheduler::RefreshScheduler;
use elle_dashboard::surface::ViewSurface;
use elle_dashboard::telemetry::SimulatedSource;
use elle_dashboard::tui::{self, EventHandler};
use elle_dashboard::DashboardError;
use tracing::{info, warn};

/// Structured logging to `path` (controlled via RUST_LOG env var).
fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

async fn run(config: DashboardConfig) -> Result<(), DashboardError> {
    let chat = Arc::new(config.chat_client()?);
    let advisor = Arc::new(config.advisor_client()?);

    let source = match config.seed {
        Some(seed) => SimulatedSource::seeded(seed),
        None => SimulatedSource::from_entropy(),
    };
    let mut dashboard = Dashboard::new(ViewSurface::default(), source, chrono::Local::now().year())
        .with_advisory_mode(config.advisory);

    let mut events = EventHandler::with_terminal_input();
    let _scheduler = RefreshScheduler::spawn(config.refresh, events.get_sender());

    let mut terminal = tui::init()?;
    let result = runtime::drive(&mut terminal, &mut dashboard, chat, advisor, &mut events).await;
    runtime::settle(result, tui::restore())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config: DashboardConfig = Cli::parse().into();
    init_tracing(&config.log_file)?;

    info!(
        url = %config.chat.url,
        refresh_ms = config.refresh.as_millis(),
        advisory = ?config.advisory,
        seed = ?config.seed,
        "starting elle dashboard"
    );
    if !config.chat.has_api_key() {
        warn!("no API key configured, chat requests go out unauthenticated");
    }

    run(config).await?;
    info!("elle dashboard stopped");
    Ok(())
}
