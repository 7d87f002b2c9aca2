//! MongoDB implementation of BookingRepository

use crate::error::Result;
use crate::models::Booking;
use crate::repository::BookingRepository;
use async_trait::async_trait;
use database::mongodb::ConnectionCache;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc, to_bson};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

const COLLECTION: &str = "bookings";
const EVENTS_COLLECTION: &str = "events";

/// MongoDB-based booking repository.
///
/// The referential check against the events collection goes through an
/// untyped handle; this crate owns the booking schema only.
#[derive(Clone)]
pub struct MongoBookingRepository {
    cache: Arc<ConnectionCache>,
}

impl MongoBookingRepository {
    pub fn new(cache: Arc<ConnectionCache>) -> Self {
        Self { cache }
    }

    async fn collection(&self) -> Result<Collection<Booking>> {
        let db = self.cache.database().await?;
        Ok(db.collection(COLLECTION))
    }

    /// Create the per-event lookup index.
    pub async fn create_indexes(&self) -> Result<()> {
        use mongodb::IndexModel;

        let indexes = vec![
            IndexModel::builder().keys(doc! { "event_id": 1 }).build(),
            IndexModel::builder()
                .keys(doc! { "created_at": -1 })
                .build(),
        ];

        self.collection().await?.create_indexes(indexes).await?;
        Ok(())
    }
}

#[async_trait]
impl BookingRepository for MongoBookingRepository {
    #[instrument(skip(self, booking), fields(event_id = %booking.event_id))]
    async fn create(&self, booking: Booking) -> Result<Booking> {
        self.collection().await?.insert_one(&booking).await?;
        Ok(booking)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Booking>> {
        let cursor = self
            .collection()
            .await?
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?;
        let bookings: Vec<Booking> = cursor.try_collect().await?;
        Ok(bookings)
    }

    #[instrument(skip(self))]
    async fn list_by_event(&self, event_id: &Uuid) -> Result<Vec<Booking>> {
        let cursor = self
            .collection()
            .await?
            .find(doc! { "event_id": to_bson(event_id)? })
            .sort(doc! { "created_at": -1 })
            .await?;
        let bookings: Vec<Booking> = cursor.try_collect().await?;
        Ok(bookings)
    }

    #[instrument(skip(self))]
    async fn event_exists(&self, event_id: &Uuid) -> Result<bool> {
        let db = self.cache.database().await?;
        let events: Collection<Document> = db.collection(EVENTS_COLLECTION);
        let count = events
            .count_documents(doc! { "_id": to_bson(event_id)? })
            .await?;
        Ok(count > 0)
    }
}
