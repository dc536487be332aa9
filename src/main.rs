use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use photo_api::auth::JwtVerifier;
use photo_api::config::{self, StoreBackend};
use photo_api::database::store::{MemoryPhotoStore, PgPhotoStore, PhotoStore};
use photo_api::database::DatabaseManager;
use photo_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, ACCESS_TOKEN_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("photo_api=info,tower_http=info")),
        )
        .init();

    let config = config::config();
    config.validate()?;
    tracing::info!(
        "Starting Photo API in {:?} mode with {:?} store",
        config.environment,
        config.store.backend
    );

    let mut database = None;
    let store: Arc<dyn PhotoStore> = match config.store.backend {
        StoreBackend::Memory => Arc::new(MemoryPhotoStore::new()),
        StoreBackend::Postgres => {
            let manager = DatabaseManager::connect(&config.database).await?;
            if config.database.run_migrations {
                manager.migrate().await?;
            }
            let store = PgPhotoStore::new(manager.pool());
            database = Some(manager);
            Arc::new(store)
        }
    };

    let verifier = Arc::new(JwtVerifier::new(&config.security.access_token_secret)?);
    let app = photo_api::app::router(AppState::new(store, verifier), config);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Photo API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(manager) = database {
        manager.close().await;
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
