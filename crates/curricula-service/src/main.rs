//! Curricula daemon - course lifecycle and compliance service
//!
//! Serves the REST API over an in-memory workflow store:
//! - role-gated workflow transitions with an append-only approval trail
//! - compliance audits of course snapshots against the rule catalog
//! - reviewer comment threads

use clap::Parser;
use curricula_service::api::{create_router, AppState};
use curricula_service::{CurriculaService, ServiceConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Curricula daemon CLI
#[derive(Parser)]
#[command(name = "curriculad")]
#[command(about = "Curricula daemon - course lifecycle and compliance service", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CURRICULA_CONFIG")]
    config: Option<String>,

    /// Listen address (overrides config file)
    #[arg(short, long, env = "CURRICULA_LISTEN_ADDR")]
    listen: Option<String>,

    /// Log level
    #[arg(long, env = "CURRICULA_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "CURRICULA_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let mut config = ServiceConfig::load(cli.config.as_deref())?;
    if let Some(listen) = &cli.listen {
        config.listen_addr = listen.parse()?;
    }

    let service = Arc::new(CurriculaService::with_institution(
        config.institution.clone(),
    ));
    let state = AppState::new(service);
    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("curricula daemon listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("curricula daemon shutting down");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
