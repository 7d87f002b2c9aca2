//! API routes module
//!
//! Defines all HTTP API routes for the Eventbook API.

pub mod bookings;
pub mod events;
pub mod health;

use axum::Router;
use database::mongodb::ConnectionCache;
use std::sync::Arc;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/events", events::router(state))
        .nest("/bookings", bookings::router(state))
        .merge(health::router(state.clone()))
}

/// Create collection indexes for all domains
pub async fn init_indexes(cache: &Arc<ConnectionCache>) -> eyre::Result<()> {
    events::init_indexes(cache).await?;
    bookings::init_indexes(cache).await?;
    Ok(())
}
