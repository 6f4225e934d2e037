//! MarketPulse CLI
//!
//! # Print a shareable summary
//! marketpulse snapshot
//!
//! # Export the snapshot as JSON
//! marketpulse export --pretty
//!
//! # Keep refreshing and print every new snapshot
//! marketpulse watch

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use marketpulse::config::{EngineConfig, ServiceConfig};
use marketpulse::core::scheduler::{RefreshService, RefreshStatus};
use marketpulse::logging;
use marketpulse::services::DataLoader;
use marketpulse::signals::SnapshotEngine;
use marketpulse::summary::summary_text;
use std::path::PathBuf;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "marketpulse")]
#[command(about = "Composite market regime score from index, VIX and breadth data")]
#[command(version)]
struct Cli {
    /// Directory holding SPY.csv, RSP.csv, VIX.csv and breadth.csv
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Skip local CSV files and only use remote sources
    #[arg(long, global = true)]
    remote_only: bool,

    /// Report trend/breadth conflicts
    #[arg(long, global = true)]
    conflicts: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a plain-text summary of the current snapshot
    Snapshot,

    /// Print the current snapshot as JSON
    Export {
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Refresh on a timer and print each new snapshot
    Watch {
        /// Seconds between refreshes (defaults to MARKETPULSE_REFRESH_SECONDS)
        #[arg(short, long)]
        interval: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    let mut service = ServiceConfig::from_env();
    if let Some(dir) = cli.data_dir {
        service.data_dir = dir;
    }
    if cli.remote_only {
        service.allow_local = false;
    }
    let mut engine = EngineConfig::from_env();
    if cli.conflicts {
        engine = engine.with_conflicts();
    }

    match cli.command {
        Commands::Snapshot => {
            let loader = DataLoader::from_config(&service)?;
            let snapshot = SnapshotEngine::with_config(engine).evaluate(&loader.load().await?);
            println!("{}", summary_text(&snapshot));
        }
        Commands::Export { pretty } => {
            let loader = DataLoader::from_config(&service)?;
            let snapshot = SnapshotEngine::with_config(engine).evaluate(&loader.load().await?);
            let json = if pretty {
                serde_json::to_string_pretty(&snapshot)?
            } else {
                serde_json::to_string(&snapshot)?
            };
            println!("{}", json);
        }
        Commands::Watch { interval } => {
            let interval = Duration::from_secs(interval.unwrap_or(service.refresh_seconds));
            let refresh = RefreshService::from_config(&service, engine)?;
            let mut updates = refresh.subscribe();
            refresh.start(interval).await?;
            info!(interval_secs = interval.as_secs(), "Watching, Ctrl-C to stop");

            loop {
                tokio::select! {
                    _ = signal::ctrl_c() => {
                        refresh.stop().await;
                        break;
                    }
                    changed = updates.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let state = updates.borrow_and_update().clone();
                        match (state.status, state.snapshot) {
                            (RefreshStatus::Ok, Some(snapshot)) => {
                                println!("{}\n", summary_text(&snapshot));
                            }
                            _ => {
                                error!(error = ?state.error, "Refresh failed");
                            }
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
