//! Hackathon Server - Application Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hackathon_server::{
    config::CONFIG,
    db::Store,
    handlers,
    services::{LocalFileStorage, Managers},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(
            CONFIG
                .server
                .log_json
                .then(|| tracing_subscriber::fmt::layer().json()),
        )
        .with((!CONFIG.server.log_json).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Starting hackathon server...");

    let store = Store::new();
    let storage = Arc::new(LocalFileStorage::new(&CONFIG.storage));
    tracing::info!(
        path = %CONFIG.storage.root_path.display(),
        "Uploaded files are stored locally"
    );

    if !CONFIG.admin.super_admin_ids.is_empty() {
        tracing::info!(
            count = CONFIG.admin.super_admin_ids.len(),
            "Super administrators configured"
        );
    }

    // Create application state
    let managers = Managers::in_memory(store, storage, &CONFIG);
    let state = AppState::new(managers, CONFIG.clone());

    // Build the router
    let app = handlers::app(state)?;

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
