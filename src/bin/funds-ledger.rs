use std::sync::Arc;

use anyhow::{Context, Result};
use funds_ledger::{
    config::AppConfig,
    notification::LoggingNotificationSink,
    service::AccountsService,
    store::in_memory_store::InMemoryLedgerStore,
    web::{AppState, create_router},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,funds_ledger=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!("{err}, using default configuration");
        AppConfig::default()
    });
    tracing::info!(
        host = %config.app_host,
        port = config.app_port,
        mode = ?config.transfer_mode,
        "configuration loaded"
    );

    let service = AccountsService::new(
        Arc::new(InMemoryLedgerStore::new()),
        Arc::new(LoggingNotificationSink),
        config.transfer_mode,
    );
    let app = create_router(AppState::new(service)).layer(TraceLayer::new_for_http());

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind `{bind_address}`"))?;
    tracing::info!("listening on http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
