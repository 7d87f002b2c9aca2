use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::ConnectionCache;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables; a missing MongoDB URL
    // or Cloudinary credential is fatal here
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // The cache connects lazily, but establishing the connection at startup
    // (with retry) surfaces a bad MONGODB_URI immediately
    let cache = Arc::new(ConnectionCache::new(config.mongodb.clone()));
    cache.start(None).await?;

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    // Initialize indexes (unique slug, listing order, booking lookups)
    api::init_indexes(&cache).await?;

    let state = AppState {
        config,
        cache: Arc::clone(&cache),
    };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app.clone()));

    info!("Starting Eventbook API with production-ready shutdown (30s timeout)");

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            cache.stop().await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Eventbook API shutdown complete");
    Ok(())
}
