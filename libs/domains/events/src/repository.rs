//! Event repository trait

use crate::error::Result;
use crate::models::Event;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for event storage operations
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persist a new event
    async fn create(&self, event: Event) -> Result<Event>;

    /// List all events, newest first
    async fn list(&self) -> Result<Vec<Event>>;

    /// Find one event by its slug
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Event>>;

    /// Find events sharing at least one of `tags`, excluding `exclude_id`
    async fn find_by_tags(&self, tags: &[String], exclude_id: &Uuid) -> Result<Vec<Event>>;

    /// Replace the event stored under `slug`, returning the new document if
    /// it existed
    async fn replace(&self, slug: &str, event: Event) -> Result<Option<Event>>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub EventRepository {}

        #[async_trait]
        impl EventRepository for EventRepository {
            async fn create(&self, event: Event) -> Result<Event>;
            async fn list(&self) -> Result<Vec<Event>>;
            async fn get_by_slug(&self, slug: &str) -> Result<Option<Event>>;
            async fn find_by_tags(&self, tags: &[String], exclude_id: &Uuid) -> Result<Vec<Event>>;
            async fn replace(&self, slug: &str, event: Event) -> Result<Option<Event>>;
        }
    }
}
