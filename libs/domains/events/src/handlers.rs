//! HTTP handlers for the events API

use crate::error::EventError;
use crate::media::MediaStore;
use crate::models::{Event, EventInput, ImageUpload};
use crate::repository::EventRepository;
use crate::service::EventService;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_helpers::ErrorResponse;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

/// Events router state
pub type EventsState<R, M> = Arc<EventService<R, M>>;

/// Create the events router
pub fn events_router<R, M>() -> Router<EventsState<R, M>>
where
    R: EventRepository + 'static,
    M: MediaStore + 'static,
{
    Router::new()
        .route("/", get(list_events::<R, M>).post(create_event::<R, M>))
        .route("/{slug}", get(get_event::<R, M>).put(update_event::<R, M>))
        .route("/{slug}/similar", get(similar_events::<R, M>))
}

/// List response wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

/// Single-event response wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct EventResponse {
    pub event: Event,
}

/// Write response carrying a confirmation message plus the document
#[derive(Debug, Serialize, ToSchema)]
pub struct EventMessageResponse {
    pub message: String,
    pub event: Event,
}

/// List all events, newest first
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All events", body = EventsResponse),
        (status = 500, description = "Fetch failed", body = ErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn list_events<R: EventRepository, M: MediaStore>(
    State(state): State<EventsState<R, M>>,
) -> Result<Json<EventsResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.list().await {
        Ok(events) => Ok(Json(EventsResponse { events })),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::with_context(
                "Error fetching events",
                e.to_string(),
            )),
        )),
    }
}

/// Create an event from a multipart form with an image file
#[utoipa::path(
    post,
    path = "/",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Event created", body = EventMessageResponse),
        (status = 400, description = "Bad form data or missing image", body = ErrorResponse),
        (status = 500, description = "Validation, upload, or database failure", body = ErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state, multipart))]
pub async fn create_event<R: EventRepository, M: MediaStore>(
    State(state): State<EventsState<R, M>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, EventError> {
    let (input, image) = parse_event_form(multipart).await?;
    let event = state.create(input, image).await?;
    Ok((
        StatusCode::CREATED,
        Json(EventMessageResponse {
            message: "Event created successfully".to_string(),
            event,
        }),
    ))
}

/// Fetch one event by slug
#[utoipa::path(
    get,
    path = "/{slug}",
    params(("slug" = String, Path, description = "Event slug")),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 400, description = "Blank slug", body = ErrorResponse),
        (status = 404, description = "No event with that slug", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn get_event<R: EventRepository, M: MediaStore>(
    State(state): State<EventsState<R, M>>,
    Path(slug): Path<String>,
) -> Result<Json<EventResponse>, EventError> {
    let event = state.get_by_slug(&slug).await?;
    Ok(Json(EventResponse { event }))
}

/// Events sharing at least one tag with the event under `slug`
#[utoipa::path(
    get,
    path = "/{slug}/similar",
    params(("slug" = String, Path, description = "Source event slug")),
    responses(
        (status = 200, description = "Similar events (empty if the source is missing)", body = EventsResponse),
        (status = 400, description = "Blank slug", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn similar_events<R: EventRepository, M: MediaStore>(
    State(state): State<EventsState<R, M>>,
    Path(slug): Path<String>,
) -> Result<Json<EventsResponse>, EventError> {
    let events = state.find_similar(&slug).await?;
    Ok(Json(EventsResponse { events }))
}

/// Replace the event under `slug` with new input
#[utoipa::path(
    put,
    path = "/{slug}",
    params(("slug" = String, Path, description = "Event slug")),
    request_body = EventInput,
    responses(
        (status = 200, description = "Event updated", body = EventMessageResponse),
        (status = 400, description = "Blank slug", body = ErrorResponse),
        (status = 404, description = "No event with that slug", body = ErrorResponse),
        (status = 500, description = "Validation or database failure", body = ErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip(state, input))]
pub async fn update_event<R: EventRepository, M: MediaStore>(
    State(state): State<EventsState<R, M>>,
    Path(slug): Path<String>,
    Json(input): Json<EventInput>,
) -> Result<Json<EventMessageResponse>, EventError> {
    let event = state.update(&slug, input).await?;
    Ok(Json(EventMessageResponse {
        message: "Event updated successfully".to_string(),
        event,
    }))
}

/// Parse the multipart create form into typed input plus the image file.
///
/// Text fields land in [`EventInput`] as-is (absent fields default to empty
/// and fail validation later); `tags` and `agenda` arrive as JSON array
/// strings; the `image` field must be a file.
async fn parse_event_form(
    mut multipart: Multipart,
) -> Result<(EventInput, ImageUpload), EventError> {
    let mut title = String::new();
    let mut description = String::new();
    let mut overview = String::new();
    let mut venue = String::new();
    let mut location = String::new();
    let mut date = String::new();
    let mut time = String::new();
    let mut mode = String::new();
    let mut audience = String::new();
    let mut organizer = String::new();
    let mut agenda: Vec<String> = Vec::new();
    let mut tags: Vec<String> = Vec::new();
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| EventError::InvalidForm(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "image" => {
                let filename = field.file_name().unwrap_or("image").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| EventError::InvalidForm(e.to_string()))?;
                image = Some(ImageUpload {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "tags" => {
                let text = read_text(field).await?;
                tags = parse_json_array("tags", &text)?;
            }
            "agenda" => {
                let text = read_text(field).await?;
                agenda = parse_json_array("agenda", &text)?;
            }
            "title" => title = read_text(field).await?,
            "description" => description = read_text(field).await?,
            "overview" => overview = read_text(field).await?,
            "venue" => venue = read_text(field).await?,
            "location" => location = read_text(field).await?,
            "date" => date = read_text(field).await?,
            "time" => time = read_text(field).await?,
            "mode" => mode = read_text(field).await?,
            "audience" => audience = read_text(field).await?,
            "organizer" => organizer = read_text(field).await?,
            _ => {}
        }
    }

    let image = image.ok_or(EventError::MissingImage)?;

    Ok((
        EventInput {
            title,
            description,
            overview,
            venue,
            location,
            date,
            time,
            mode,
            audience,
            agenda,
            organizer,
            tags,
        },
        image,
    ))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, EventError> {
    field
        .text()
        .await
        .map_err(|e| EventError::InvalidForm(e.to_string()))
}

fn parse_json_array(name: &str, text: &str) -> Result<Vec<String>, EventError> {
    serde_json::from_str(text)
        .map_err(|e| EventError::Validation(format!("{} must be a JSON array of strings: {}", name, e)))
}
