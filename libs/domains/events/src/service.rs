//! Event service layer

use crate::error::{EventError, Result};
use crate::media::MediaStore;
use crate::models::{Event, EventInput, ImageUpload};
use crate::normalize::{normalize_date, normalize_time, slugify};
use crate::repository::EventRepository;
use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

/// Event service coordinating validation, normalization, image hosting, and
/// MongoDB persistence.
pub struct EventService<R: EventRepository, M: MediaStore> {
    repository: R,
    media: M,
}

impl<R: EventRepository, M: MediaStore> EventService<R, M> {
    pub fn new(repository: R, media: M) -> Self {
        Self { repository, media }
    }

    /// Create a new event from validated form input plus its image file.
    ///
    /// Uploads the image first; the document is only written once the hosted
    /// URL is known. Normalization failures fail the write before any I/O.
    #[instrument(skip(self, input, image), fields(title = %input.title))]
    pub async fn create(&self, input: EventInput, image: ImageUpload) -> Result<Event> {
        input.validate()?;

        let slug = slugify(&input.title);
        let date = normalize_date(&input.date)?;
        let time = normalize_time(&input.time)?;

        let image_url = self.media.upload(image).await?;

        let now = Utc::now();
        let event = Event {
            id: Uuid::now_v7(),
            title: input.title.trim().to_string(),
            slug,
            description: input.description.trim().to_string(),
            overview: input.overview.trim().to_string(),
            image: image_url,
            venue: input.venue.trim().to_string(),
            location: input.location.trim().to_string(),
            date,
            time,
            mode: input.mode.trim().to_string(),
            audience: input.audience.trim().to_string(),
            agenda: input.agenda,
            organizer: input.organizer.trim().to_string(),
            tags: input.tags,
            created_at: now,
            updated_at: now,
        };

        let event = self.repository.create(event).await?;
        info!(slug = %event.slug, "Event created");
        Ok(event)
    }

    /// List all events, newest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Event>> {
        self.repository.list().await
    }

    /// Fetch one event by slug.
    ///
    /// A blank slug is rejected before any database access.
    #[instrument(skip(self))]
    pub async fn get_by_slug(&self, slug: &str) -> Result<Event> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(EventError::InvalidSlug);
        }

        self.repository
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| EventError::NotFound {
                slug: slug.to_string(),
            })
    }

    /// Find events sharing at least one tag with the event under `slug`.
    ///
    /// A missing source event yields an empty list rather than a 404; the
    /// direct lookup endpoint is the canonical not-found path.
    #[instrument(skip(self))]
    pub async fn find_similar(&self, slug: &str) -> Result<Vec<Event>> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(EventError::InvalidSlug);
        }

        let Some(event) = self.repository.get_by_slug(slug).await? else {
            return Ok(Vec::new());
        };

        self.repository.find_by_tags(&event.tags, &event.id).await
    }

    /// Replace the event stored under `slug` with new input.
    ///
    /// The slug is regenerated from the (possibly changed) title; id, image
    /// URL, and creation time are carried over from the stored document.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn update(&self, slug: &str, input: EventInput) -> Result<Event> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(EventError::InvalidSlug);
        }

        input.validate()?;

        let existing = self
            .repository
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| EventError::NotFound {
                slug: slug.to_string(),
            })?;

        let replacement = Event {
            id: existing.id,
            title: input.title.trim().to_string(),
            slug: slugify(&input.title),
            description: input.description.trim().to_string(),
            overview: input.overview.trim().to_string(),
            image: existing.image,
            venue: input.venue.trim().to_string(),
            location: input.location.trim().to_string(),
            date: normalize_date(&input.date)?,
            time: normalize_time(&input.time)?,
            mode: input.mode.trim().to_string(),
            audience: input.audience.trim().to_string(),
            agenda: input.agenda,
            organizer: input.organizer.trim().to_string(),
            tags: input.tags,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        self.repository
            .replace(slug, replacement)
            .await?
            .ok_or_else(|| EventError::NotFound {
                slug: slug.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::mock::MockMediaStore;
    use crate::models::sample_input;
    use crate::repository::mock::MockEventRepository;

    fn sample_image() -> ImageUpload {
        ImageUpload {
            filename: "poster.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_slug_date_and_time() {
        let mut input = sample_input();
        input.title = "My Cool Talk!!".to_string();
        input.date = "2026-3-18".to_string();
        input.time = "9:30 PM".to_string();

        let mut repo = MockEventRepository::new();
        repo.expect_create().returning(|event| Ok(event));

        let mut media = MockMediaStore::new();
        media
            .expect_upload()
            .returning(|_| Ok("https://cdn.example.com/poster.png".to_string()));

        let service = EventService::new(repo, media);
        let event = service.create(input, sample_image()).await.unwrap();

        assert_eq!(event.slug, "my-cool-talk");
        assert_eq!(event.date, "2026-03-18");
        assert_eq!(event.time, "21:30");
        assert_eq!(event.image, "https://cdn.example.com/poster.png");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_time_before_any_io() {
        let mut input = sample_input();
        input.time = "25:99".to_string();

        // No expectations: any repository or media call would panic.
        let repo = MockEventRepository::new();
        let media = MockMediaStore::new();

        let service = EventService::new(repo, media);
        let err = service.create(input, sample_image()).await.unwrap_err();
        assert!(matches!(err, EventError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_unparseable_time_word() {
        let mut input = sample_input();
        input.time = "noon".to_string();

        let service = EventService::new(MockEventRepository::new(), MockMediaStore::new());
        assert!(service.create(input, sample_image()).await.is_err());
    }

    #[tokio::test]
    async fn test_get_by_slug_blank_fails_without_database_access() {
        // No expectations: a repository call would panic.
        let repo = MockEventRepository::new();
        let service = EventService::new(repo, MockMediaStore::new());

        let err = service.get_by_slug("   ").await.unwrap_err();
        assert!(matches!(err, EventError::InvalidSlug));
    }

    #[tokio::test]
    async fn test_get_by_slug_not_found_names_the_slug() {
        let mut repo = MockEventRepository::new();
        repo.expect_get_by_slug().returning(|_| Ok(None));

        let service = EventService::new(repo, MockMediaStore::new());
        let err = service.get_by_slug("rust-meetup").await.unwrap_err();
        assert!(err.to_string().contains("rust-meetup"));
    }

    #[tokio::test]
    async fn test_find_similar_missing_source_is_empty_not_error() {
        let mut repo = MockEventRepository::new();
        repo.expect_get_by_slug().returning(|_| Ok(None));

        let service = EventService::new(repo, MockMediaStore::new());
        let similar = service.find_similar("ghost").await.unwrap();
        assert!(similar.is_empty());
    }

    #[tokio::test]
    async fn test_find_similar_queries_source_tags_excluding_source() {
        let source = {
            let mut input = sample_input();
            input.tags = vec!["ai".to_string(), "cloud".to_string()];
            input
        };

        let mut repo = MockEventRepository::new();
        let source_event = make_event(&source);
        let source_id = source_event.id;
        {
            let source_event = source_event.clone();
            repo.expect_get_by_slug()
                .returning(move |_| Ok(Some(source_event.clone())));
        }
        repo.expect_find_by_tags()
            .withf(move |tags, exclude| {
                tags.len() == 2 && tags[0] == "ai" && tags[1] == "cloud" && *exclude == source_id
            })
            .returning(|_, _| Ok(Vec::new()));

        let service = EventService::new(repo, MockMediaStore::new());
        service.find_similar("rust-meetup").await.unwrap();
    }

    #[tokio::test]
    async fn test_update_regenerates_slug_from_new_title() {
        let existing = make_event(&sample_input());
        let existing_id = existing.id;
        let existing_image = existing.image.clone();

        let mut repo = MockEventRepository::new();
        {
            let existing = existing.clone();
            repo.expect_get_by_slug()
                .returning(move |_| Ok(Some(existing.clone())));
        }
        repo.expect_replace()
            .withf(move |slug, event| {
                slug == "rust-meetup"
                    && event.slug == "renamed-talk"
                    && event.id == existing_id
                    && event.image == existing_image
            })
            .returning(|_, event| Ok(Some(event)));

        let mut input = sample_input();
        input.title = "Renamed Talk".to_string();

        let service = EventService::new(repo, MockMediaStore::new());
        let updated = service.update("rust-meetup", input).await.unwrap();
        assert_eq!(updated.slug, "renamed-talk");
    }

    fn make_event(input: &EventInput) -> Event {
        let now = Utc::now();
        Event {
            id: Uuid::now_v7(),
            title: input.title.clone(),
            slug: slugify(&input.title),
            description: input.description.clone(),
            overview: input.overview.clone(),
            image: "https://cdn.example.com/poster.png".to_string(),
            venue: input.venue.clone(),
            location: input.location.clone(),
            date: input.date.clone(),
            time: input.time.clone(),
            mode: input.mode.clone(),
            audience: input.audience.clone(),
            agenda: input.agenda.clone(),
            organizer: input.organizer.clone(),
            tags: input.tags.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}
