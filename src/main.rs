//! Banara Server - Beach Tourism Management
//!
//! REST API server for visitor check-ins and map location points.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use banara_server::{
    api,
    config::{AppConfig, LoggingConfig},
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing; the guard flushes the log file on exit
    let _guard = init_tracing(&config.logging);

    tracing::info!("Starting Banara Server v{}", env!("CARGO_PKG_VERSION"));

    // Create repository and services
    let repository = Repository::new(&config.database, &config.store)
        .context("Failed to open points database")?;
    tracing::info!("Using {:?} points backend", config.database.backend);

    let services = Services::new(repository);

    if config.database.refresh_interval_secs > 0 {
        services
            .points
            .spawn_refresh(Duration::from_secs(config.database.refresh_interval_secs));
        tracing::info!(
            "Polling points every {}s for live subscribers",
            config.database.refresh_interval_secs
        );
    }

    // Save server address before moving config
    let addr = SocketAddr::new(
        config
            .server
            .host
            .parse()
            .context("Invalid host address")?,
        config.server.port,
    );

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    let app = api::router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| format!("banara_server={},tower_http=debug", logging.level).into())
    };

    let stdout = if logging.format == "json" {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    let (file, guard) = match &logging.file {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "banara-server.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stdout.with_filter(filter()))
        .with(file)
        .init();

    guard
}
