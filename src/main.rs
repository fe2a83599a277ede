//! IMDS Mock Server: simulated scheduled-events metadata endpoint
//!
//! Main entry point that loads configuration, builds the scenario catalog
//! and event state, and serves the HTTP surface until shutdown.

use std::future::IntoFuture;
use std::pin::pin;
use std::time::Duration;

use clap::Parser;
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use imds_core::config::AppConfig;
use imds_core::AppResult;
use imds_core::error::{AppError, ErrorKind};
use imds_service::ScenarioCatalog;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "imds-mock-server", version, about = "Mock scheduled-events metadata service")]
struct Cli {
    /// Base configuration file, without extension
    #[arg(long, default_value = "config/default")]
    config: String,

    /// Environment overlay loaded from `config/{env}`
    #[arg(long, env = "IMDS_ENV", default_value = "development")]
    env: String,

    /// Bind address override
    #[arg(long)]
    host: Option<String>,

    /// Bind port override
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment, then apply CLI overrides
fn load_configuration(cli: &Cli) -> AppResult<AppConfig> {
    let mut config = AppConfig::load(&cli.config, &cli.env)?;

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> AppResult<()> {
    tracing::info!("Starting IMDS mock v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Scenario catalog ─────────────────────────────────
    let catalog = ScenarioCatalog::from_config(&config.scenarios)?;
    tracing::info!(scenarios = catalog.len(), "Scenario catalog loaded");
    for template in catalog.iter() {
        tracing::debug!(
            scenario = %template.name,
            event_type = %template.event_type,
            statuses = template.statuses.len(),
            "Registered scenario"
        );
    }

    // ── Step 2: State and router ─────────────────────────────────
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let app_state = imds_api::AppState::new(config, catalog);
    let app = imds_api::build_app(app_state);

    // ── Step 3: Bind and serve ───────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Io, format!("Failed to bind {}: {}", addr, e), e)
        })?;

    tracing::info!("IMDS mock listening on http://{}", addr);
    tracing::info!("Poll endpoint: http://{}/metadata/scheduledevents", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });
    let mut server = pin!(server.into_future());

    // ── Step 4: Graceful shutdown ────────────────────────────────
    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::internal(format!("Server error: {}", e)))?;
        }
        _ = shutdown_rx.changed() => {
            match tokio::time::timeout(grace, &mut server).await {
                Ok(result) => {
                    result.map_err(|e| AppError::internal(format!("Server error: {}", e)))?
                }
                Err(_) => tracing::warn!(
                    "In-flight requests still open after {}s, exiting",
                    grace.as_secs()
                ),
            }
        }
    }

    tracing::info!("IMDS mock shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
