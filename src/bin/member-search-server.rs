//! Member search HTTP server.
//!
//! Loads configuration, connects the configured store, optionally seeds
//! sample data, and serves the API until Ctrl-C.

use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::{info, warn};

use member_search::config::{AppConfig, ConfigManager, StoreKind};
use member_search::logging::init_tracing;
use member_search::repository::{InMemoryMemberStore, MemberStore, PgMemberStore};
use member_search::seed::seed_sample_data;
use member_search::web::{create_app, state::AppState};

async fn connect_store(config: &AppConfig) -> anyhow::Result<Arc<dyn MemberStore>> {
    match config.store.kind {
        StoreKind::Memory => {
            info!("Using in-memory member store");
            Ok(Arc::new(InMemoryMemberStore::new()))
        }
        StoreKind::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .min_connections(config.database.min_connections)
                .acquire_timeout(config.database.acquire_timeout())
                .connect(&config.database.url)
                .await
                .context("Failed to connect to PostgreSQL")?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            info!(
                max_connections = config.database.max_connections,
                "Connected to PostgreSQL member store"
            );
            Ok(Arc::new(PgMemberStore::new(pool)))
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let manager = ConfigManager::load().context("Failed to load configuration")?;
    let config = manager.config();

    let store = connect_store(config).await?;

    if config.seed.enabled {
        seed_sample_data(store.as_ref(), config.seed.member_count)
            .await
            .context("Failed to seed sample data")?;
    }

    let app = create_app(AppState::new(config.web.clone(), store));

    let listener = TcpListener::bind(&config.web.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.web.bind_address))?;

    info!(
        environment = manager.environment(),
        bind_address = %config.web.bind_address,
        "Member search server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
