//! HTTP handlers for the bookings API

use crate::error::BookingError;
use crate::models::{Booking, BookingInput};
use crate::repository::BookingRepository;
use crate::service::BookingService;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Bookings router state
pub type BookingsState<R> = Arc<BookingService<R>>;

/// Create the bookings router
pub fn bookings_router<R: BookingRepository + 'static>() -> Router<BookingsState<R>> {
    Router::new().route("/", get(list_bookings::<R>).post(create_booking::<R>))
}

/// List response wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingsResponse {
    pub bookings: Vec<Booking>,
}

/// Write response carrying a confirmation message plus the document
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingMessageResponse {
    pub message: String,
    pub booking: Booking,
}

/// Query parameters for listing bookings
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookingQuery {
    /// Restrict to bookings of one event
    pub event_id: Option<Uuid>,
}

/// List bookings, optionally filtered by event
#[utoipa::path(
    get,
    path = "/",
    params(BookingQuery),
    responses(
        (status = 200, description = "Bookings", body = BookingsResponse),
        (status = 500, description = "Database failure")
    ),
    tag = "bookings"
)]
#[instrument(skip(state))]
pub async fn list_bookings<R: BookingRepository>(
    State(state): State<BookingsState<R>>,
    Query(query): Query<BookingQuery>,
) -> Result<Json<BookingsResponse>, BookingError> {
    let bookings = state.list(query.event_id).await?;
    Ok(Json(BookingsResponse { bookings }))
}

/// Book an event
#[utoipa::path(
    post,
    path = "/",
    request_body = BookingInput,
    responses(
        (status = 201, description = "Booking created", body = BookingMessageResponse),
        (status = 400, description = "Invalid booking payload"),
        (status = 404, description = "Referenced event does not exist"),
        (status = 500, description = "Database failure")
    ),
    tag = "bookings"
)]
#[instrument(skip(state, input), fields(event_id = %input.event_id))]
pub async fn create_booking<R: BookingRepository>(
    State(state): State<BookingsState<R>>,
    Json(input): Json<BookingInput>,
) -> Result<impl IntoResponse, BookingError> {
    let booking = state.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookingMessageResponse {
            message: "Booking created successfully".to_string(),
            booking,
        }),
    ))
}
