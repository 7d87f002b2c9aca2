//! Events Domain
//!
//! Event listing and creation backed by MongoDB, with images hosted on
//! Cloudinary. Writes validate and normalize their input explicitly before
//! persistence: the slug is derived from the title, dates are canonicalized
//! to `YYYY-MM-DD`, and times to 24-hour `HH:MM`.

use utoipa::OpenApi;

mod error;
mod handlers;
mod media;
mod models;
mod mongodb;
mod normalize;
mod repository;
mod service;

pub use error::{EventError, Result};
pub use handlers::{
    EventMessageResponse, EventResponse, EventsResponse, EventsState, events_router,
};
pub use media::{CloudinaryMediaStore, MediaStore};
pub use models::{Event, EventInput, ImageUpload};
pub use mongodb::MongoEventRepository;
pub use normalize::{NormalizeError, normalize_date, normalize_time, slugify};
pub use repository::EventRepository;
pub use service::EventService;

/// OpenAPI documentation for the events API
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_events,
        handlers::create_event,
        handlers::get_event,
        handlers::similar_events,
        handlers::update_event,
    ),
    components(schemas(
        Event,
        EventInput,
        EventsResponse,
        EventResponse,
        EventMessageResponse,
        axum_helpers::ErrorResponse,
    )),
    tags(
        (name = "events", description = "Event listing, detail, similar-events, and creation")
    )
)]
pub struct ApiDoc;
