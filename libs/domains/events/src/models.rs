//! Event domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// An event as stored in MongoDB and returned over the API.
///
/// `slug` is derived from `title` and carries a unique index; `date` is a
/// canonical `YYYY-MM-DD` string and `time` a zero-padded 24-hour `HH:MM`
/// string. Both are normalized by the write path before persistence.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,

    /// Event title
    pub title: String,

    /// URL-safe identifier derived from the title
    pub slug: String,

    /// Full event description
    pub description: String,

    /// Short overview shown in listings
    pub overview: String,

    /// URL of the hosted event image
    pub image: String,

    /// Venue name
    pub venue: String,

    /// City / location text
    pub location: String,

    /// Event date, canonical `YYYY-MM-DD`
    pub date: String,

    /// Event start time, canonical 24-hour `HH:MM`
    pub time: String,

    /// Delivery mode (e.g. "online", "in-person", "hybrid")
    pub mode: String,

    /// Intended audience
    pub audience: String,

    /// Ordered agenda items
    pub agenda: Vec<String>,

    /// Organizer name
    pub organizer: String,

    /// Tags used for the similar-events lookup
    pub tags: Vec<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Input for creating or replacing an event.
///
/// The slug is never accepted from clients; it is regenerated from the title
/// on every write. `date` and `time` accept loose formats and are normalized
/// by [`crate::service::EventService`] before persistence.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct EventInput {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "overview is required"))]
    pub overview: String,

    #[validate(length(min = 1, message = "venue is required"))]
    pub venue: String,

    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,

    #[validate(length(min = 1, message = "time is required"))]
    pub time: String,

    #[validate(length(min = 1, message = "mode is required"))]
    pub mode: String,

    #[validate(length(min = 1, message = "audience is required"))]
    pub audience: String,

    #[validate(length(min = 1, message = "agenda must be a non-empty array of strings"))]
    pub agenda: Vec<String>,

    #[validate(length(min = 1, message = "organizer is required"))]
    pub organizer: String,

    #[validate(length(min = 1, message = "tags must be a non-empty array of strings"))]
    pub tags: Vec<String>,
}

/// An image file extracted from the multipart upload form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
pub(crate) fn sample_input() -> EventInput {
    EventInput {
        title: "Rust Meetup".to_string(),
        description: "An evening of Rust talks".to_string(),
        overview: "Talks and networking".to_string(),
        venue: "Main Hall".to_string(),
        location: "Berlin".to_string(),
        date: "2026-03-18".to_string(),
        time: "18:30".to_string(),
        mode: "in-person".to_string(),
        audience: "developers".to_string(),
        agenda: vec!["Doors open".to_string(), "Talks".to_string()],
        organizer: "Rust Berlin".to_string(),
        tags: vec!["rust".to_string(), "meetup".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_input_valid() {
        assert!(sample_input().validate().is_ok());
    }

    #[test]
    fn test_event_input_rejects_empty_agenda() {
        let mut input = sample_input();
        input.agenda.clear();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_event_input_rejects_empty_tags() {
        let mut input = sample_input();
        input.tags.clear();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_event_serializes_id_as_underscore_id() {
        let now = Utc::now();
        let event = Event {
            id: Uuid::now_v7(),
            title: "T".into(),
            slug: "t".into(),
            description: "d".into(),
            overview: "o".into(),
            image: "https://example.com/i.png".into(),
            venue: "v".into(),
            location: "l".into(),
            date: "2026-03-18".into(),
            time: "18:30".into(),
            mode: "online".into(),
            audience: "all".into(),
            agenda: vec!["a".into()],
            organizer: "org".into(),
            tags: vec!["rust".into()],
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("_id").is_some());
        assert!(value.get("id").is_none());
    }
}
