//! OpenForms Server - Main Entry Point

use anyhow::Context;
use openforms_api::config::{ServerConfig, StorageConfig, DEFAULT_CONFIG_PATH};
use openforms_api::{build_router, ApiState};
use forms_core::SqliteStore;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path =
        std::env::var("OPENFORMS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let loaded = ServerConfig::load(&config_path)?;
    let found = loaded.is_some();

    let mut config = loaded.unwrap_or_default();
    config.apply_env(|key| std::env::var(key).ok());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("OpenForms server v{}", env!("CARGO_PKG_VERSION"));
    if !found {
        tracing::warn!(path = %config_path, "config not found, using defaults");
    }

    let state = match &config.storage {
        StorageConfig::Memory => {
            tracing::warn!("using in-memory storage; data is lost on exit");
            ApiState::in_memory()
        }
        StorageConfig::Sqlite { path } => {
            let store = SqliteStore::open(path)
                .with_context(|| format!("opening database {}", path.display()))?;
            ApiState::new(Arc::new(store))
        }
    };

    let mut app = build_router(state);
    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!("OpenForms API listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
