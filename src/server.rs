//! HTTP server initialization and runtime setup.
//!
//! Opens the record store, ensures its schema and runs the Axum server until
//! Ctrl-C.

use crate::application::services::AliasService;
use crate::config::Config;
use crate::domain::repositories::RecordStore;
use crate::infrastructure::persistence::SqliteRecordStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite record store (file created if missing)
/// - `urls` table and alias index
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened
/// - Schema creation fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = SqliteRecordStore::connect(&config.database_url, &config.store_options())
        .await
        .context("Failed to open record store")?;
    tracing::info!("Connected to database");

    store
        .ensure_schema()
        .await
        .context("Failed to initialize schema")?;

    let store = Arc::new(store);
    let store_for_service: Arc<dyn RecordStore> = store.clone();
    let alias_service = Arc::new(AliasService::with_policy(
        store_for_service,
        config.alias_policy(),
    ));

    let state = AppState::new(alias_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
