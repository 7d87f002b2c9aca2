//! Bookings API routes

use crate::state::AppState;
use axum::Router;
use database::mongodb::ConnectionCache;
use domain_bookings::{BookingService, MongoBookingRepository, bookings_router};
use std::sync::Arc;
use tracing::info;

/// Create the bookings router
pub fn router(state: &AppState) -> Router {
    let repository = MongoBookingRepository::new(Arc::clone(&state.cache));
    let service = BookingService::new(repository);

    bookings_router().with_state(Arc::new(service))
}

/// Initialize booking indexes in MongoDB
pub async fn init_indexes(cache: &Arc<ConnectionCache>) -> eyre::Result<()> {
    let repository = MongoBookingRepository::new(Arc::clone(cache));
    repository
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create booking indexes: {}", e))?;
    info!("Booking collection indexes created");
    Ok(())
}
