//! Bookings Domain
//!
//! Event bookings backed by MongoDB. A booking ties an email address to an
//! event; the write path confirms the referenced event exists before
//! persisting anything.

use utoipa::OpenApi;

mod error;
mod handlers;
mod models;
mod mongodb;
mod repository;
mod service;

pub use error::{BookingError, Result};
pub use handlers::{
    BookingMessageResponse, BookingsResponse, BookingsState, bookings_router,
};
pub use models::{Booking, BookingInput};
pub use mongodb::MongoBookingRepository;
pub use repository::BookingRepository;
pub use service::BookingService;

/// OpenAPI documentation for the bookings API
#[derive(OpenApi)]
#[openapi(
    paths(handlers::list_bookings, handlers::create_booking),
    components(schemas(Booking, BookingInput, BookingsResponse, BookingMessageResponse)),
    tags(
        (name = "bookings", description = "Event bookings with referential checks")
    )
)]
pub struct ApiDoc;
