//! Events API routes
//!
//! Wires the events domain to HTTP routes: MongoDB storage through the
//! shared connection cache plus Cloudinary image hosting.

use crate::state::AppState;
use axum::Router;
use database::mongodb::ConnectionCache;
use domain_events::{CloudinaryMediaStore, EventService, MongoEventRepository, events_router};
use std::sync::Arc;
use tracing::info;

/// Create the events router
pub fn router(state: &AppState) -> Router {
    let repository = MongoEventRepository::new(Arc::clone(&state.cache));
    let media = CloudinaryMediaStore::new(state.config.media.clone());
    let service = EventService::new(repository, media);

    events_router().with_state(Arc::new(service))
}

/// Initialize event indexes in MongoDB (unique slug, listing order)
pub async fn init_indexes(cache: &Arc<ConnectionCache>) -> eyre::Result<()> {
    let repository = MongoEventRepository::new(Arc::clone(cache));
    repository
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create event indexes: {}", e))?;
    info!("Event collection indexes created");
    Ok(())
}
