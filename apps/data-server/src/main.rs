mod config;
mod db;
mod errors;
mod models;
mod routes;
mod state;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, DB_URL_ENV};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{crate_name}={level},tower_http={level}",
                crate_name = env!("CARGO_PKG_NAME").replace('-', "_"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting data server v{}", env!("CARGO_PKG_VERSION"));
    if config.database_url.is_none() {
        warn!("{DB_URL_ENV} is not set; requests will fail until it is");
    }

    let addr = config.bind_address();
    let app = build_router(AppState { config }).layer(TraceLayer::new_for_http());

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Data server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await
        }
    }
}
