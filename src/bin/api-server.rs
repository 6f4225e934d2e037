//! MarketPulse API Server
//!
//! Refreshes the snapshot on a timer and serves the latest one over HTTP.

use dotenvy::dotenv;
use marketpulse::config::{EngineConfig, ServiceConfig};
use marketpulse::core::http::start_server;
use marketpulse::core::scheduler::RefreshService;
use marketpulse::logging;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let service = ServiceConfig::from_env();
    let engine = EngineConfig::from_env();

    let env = marketpulse::config::get_environment();
    info!("Starting MarketPulse API Server");
    info!(environment = %env, "Environment");
    info!(data_dir = %service.data_dir.display(), allow_local = service.allow_local, "Data sources");
    info!(port = service.port, "HTTP Server: http://0.0.0.0:{}", service.port);

    let refresh = RefreshService::from_config(&service, engine)?;
    refresh
        .start(Duration::from_secs(service.refresh_seconds))
        .await?;

    let port = service.port;
    let server_refresh = refresh.clone();
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, server_refresh).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            refresh.stop().await;
            info!("API server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
