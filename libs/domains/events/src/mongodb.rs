//! MongoDB implementation of EventRepository

use crate::error::Result;
use crate::models::Event;
use crate::repository::EventRepository;
use async_trait::async_trait;
use database::mongodb::ConnectionCache;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{doc, to_bson};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

const COLLECTION: &str = "events";

/// MongoDB-based event repository.
///
/// Holds the shared connection cache rather than a resolved collection, so
/// every operation goes through [`ConnectionCache::acquire`] and benefits
/// from its lazy-connect and retry-after-failure semantics.
#[derive(Clone)]
pub struct MongoEventRepository {
    cache: Arc<ConnectionCache>,
}

impl MongoEventRepository {
    pub fn new(cache: Arc<ConnectionCache>) -> Self {
        Self { cache }
    }

    async fn collection(&self) -> Result<Collection<Event>> {
        let db = self.cache.database().await?;
        Ok(db.collection(COLLECTION))
    }

    /// Create indexes for slug lookups and listing order.
    ///
    /// The unique slug index backs the per-URL lookup and rejects duplicate
    /// slugs at the database level.
    pub async fn create_indexes(&self) -> Result<()> {
        use mongodb::IndexModel;
        use mongodb::options::IndexOptions;

        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "slug": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
            IndexModel::builder()
                .keys(doc! { "created_at": -1 })
                .build(),
            IndexModel::builder().keys(doc! { "tags": 1 }).build(),
        ];

        self.collection().await?.create_indexes(indexes).await?;
        Ok(())
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    #[instrument(skip(self, event), fields(slug = %event.slug))]
    async fn create(&self, event: Event) -> Result<Event> {
        self.collection().await?.insert_one(&event).await?;
        Ok(event)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Event>> {
        let cursor = self
            .collection()
            .await?
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?;
        let events: Vec<Event> = cursor.try_collect().await?;
        Ok(events)
    }

    #[instrument(skip(self))]
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Event>> {
        let event = self
            .collection()
            .await?
            .find_one(doc! { "slug": slug })
            .await?;
        Ok(event)
    }

    #[instrument(skip(self, tags))]
    async fn find_by_tags(&self, tags: &[String], exclude_id: &Uuid) -> Result<Vec<Event>> {
        let filter = doc! {
            "_id": { "$ne": to_bson(exclude_id)? },
            "tags": { "$in": tags },
        };
        let cursor = self.collection().await?.find(filter).await?;
        let events: Vec<Event> = cursor.try_collect().await?;
        Ok(events)
    }

    #[instrument(skip(self, event))]
    async fn replace(&self, slug: &str, event: Event) -> Result<Option<Event>> {
        use mongodb::options::{FindOneAndReplaceOptions, ReturnDocument};

        let options = FindOneAndReplaceOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let replaced = self
            .collection()
            .await?
            .find_one_and_replace(doc! { "slug": slug }, &event)
            .with_options(options)
            .await?;
        Ok(replaced)
    }
}
