//! listenboard - Spotify listening analytics dashboard

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use listenboard_core::{AnalyticsClient, ClientConfig, DashboardState, SyncOrchestrator};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "listenboard",
    version,
    about = "Spotify listening analytics dashboard",
    long_about = "A terminal dashboard for Spotify listening analytics.\n\
                  \n\
                  Talks to the listening-history analytics backend and visualizes the\n\
                  daily trend, weekday/hour heatmap, top artists and genres, and the\n\
                  longest listening sessions.\n\
                  \n\
                  Examples:\n\
                    listenboard --user-id 42             # Run TUI (default)\n\
                    listenboard --user-id 42 stats       # Print stats summary\n\
                    listenboard --user-id 42 sessions    # Print session table\n\
                    listenboard --user-id 42 resync      # Refresh from Spotify, then print stats\n\
                  \n\
                  Environment Variables:\n\
                    LISTENBOARD_BACKEND_URL              # Analytics backend base URL\n\
                    LISTENBOARD_USER_ID                  # Default user id\n\
                    LISTENBOARD_NO_COLOR                 # Disable ANSI colors (log-friendly)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Analytics backend base URL
    #[arg(long, env = "LISTENBOARD_BACKEND_URL")]
    backend_url: Option<String>,

    /// Spotify user id to load analytics for
    #[arg(long, env = "LISTENBOARD_USER_ID")]
    user_id: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "LISTENBOARD_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Run TUI interface (default)
    Tui,
    /// Print stats summary and exit
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the longest listening sessions and exit
    Sessions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Trigger a backend refresh from Spotify, then print stats
    Resync {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ClientConfig::default();
    if let Some(url) = cli.backend_url.clone() {
        config.base_url = url;
    }
    config.timeout = Duration::from_secs(cli.timeout_secs);

    let client = AnalyticsClient::new(config).context("Failed to build analytics client")?;
    let orchestrator = Arc::new(SyncOrchestrator::new(client, cli.user_id.clone()));

    let no_color = cli.no_color;

    match cli.mode.unwrap_or(Mode::Tui) {
        Mode::Tui => {
            // No stdout logging in TUI mode; it would corrupt the screen
            listenboard_tui::run(orchestrator).await?;
        }
        Mode::Stats { json } => {
            init_logging(json);
            run_stats(orchestrator, json, no_color).await?;
        }
        Mode::Sessions { json } => {
            init_logging(json);
            run_sessions(orchestrator, json, no_color).await?;
        }
        Mode::Resync { json } => {
            init_logging(json);
            run_resync(orchestrator, json, no_color).await?;
        }
    }

    Ok(())
}

fn init_logging(json_output: bool) {
    // Machine-readable output keeps stderr quiet unless explicitly raised
    let default_level = if json_output {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}

async fn run_stats(orchestrator: Arc<SyncOrchestrator>, json: bool, no_color: bool) -> Result<()> {
    let snapshot = load_snapshot(&orchestrator).await?;
    println!("{}", cli::format_stats(&snapshot, json, no_color));
    Ok(())
}

async fn run_sessions(
    orchestrator: Arc<SyncOrchestrator>,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let snapshot = load_snapshot(&orchestrator).await?;
    println!("{}", cli::format_sessions(&snapshot, json, no_color));
    Ok(())
}

async fn run_resync(orchestrator: Arc<SyncOrchestrator>, json: bool, no_color: bool) -> Result<()> {
    if !json {
        eprintln!("Refreshing listening history from Spotify...");
    }

    orchestrator
        .resync()
        .await
        .context("Resync failed")?;

    tracing::info!("backend refresh and refetch complete");

    let view = orchestrator.view();
    let snapshot = view.snapshot.context("Resync completed without data")?;

    println!("{}", cli::format_stats(&snapshot, json, no_color));
    Ok(())
}

async fn load_snapshot(
    orchestrator: &Arc<SyncOrchestrator>,
) -> Result<listenboard_core::DashboardSnapshot> {
    if orchestrator.view().state == DashboardState::NoIdentity {
        anyhow::bail!(
            "No user id given. Pass --user-id or set LISTENBOARD_USER_ID."
        );
    }

    tracing::info!(user_id = ?orchestrator.user_id(), "one-shot analytics load");

    orchestrator
        .initial_load()
        .await
        .context("Failed to load analytics")?;

    orchestrator
        .view()
        .snapshot
        .context("Load completed without data")
}
