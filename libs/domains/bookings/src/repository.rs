//! Booking repository trait

use crate::error::Result;
use crate::models::Booking;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for booking storage operations
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking
    async fn create(&self, booking: Booking) -> Result<Booking>;

    /// List all bookings, newest first
    async fn list(&self) -> Result<Vec<Booking>>;

    /// List bookings for one event, newest first
    async fn list_by_event(&self, event_id: &Uuid) -> Result<Vec<Booking>>;

    /// True if an event with this id exists
    async fn event_exists(&self, event_id: &Uuid) -> Result<bool>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub BookingRepository {}

        #[async_trait]
        impl BookingRepository for BookingRepository {
            async fn create(&self, booking: Booking) -> Result<Booking>;
            async fn list(&self) -> Result<Vec<Booking>>;
            async fn list_by_event(&self, event_id: &Uuid) -> Result<Vec<Booking>>;
            async fn event_exists(&self, event_id: &Uuid) -> Result<bool>;
        }
    }
}
