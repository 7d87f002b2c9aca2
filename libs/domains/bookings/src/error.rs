//! Booking domain error types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::ErrorResponse;

/// Result type for booking operations
pub type Result<T> = std::result::Result<T, BookingError>;

/// Booking domain errors
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// The booking references an event that does not exist
    #[error("Referenced event not found: {event_id}")]
    EventNotFound { event_id: uuid::Uuid },

    /// Input constraint violated (bad email)
    #[error("{0}")]
    Validation(String),

    /// MongoDB failure
    #[error("Database error: {0}")]
    Database(String),
}

impl From<validator::ValidationErrors> for BookingError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<mongodb::error::Error> for BookingError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<database::mongodb::MongoError> for BookingError {
    fn from(err: database::mongodb::MongoError) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for BookingError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        Self::Database(format!("BSON serialization error: {}", err))
    }
}

impl BookingError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::EventNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_not_found_names_the_id() {
        let id = uuid::Uuid::now_v7();
        let err = BookingError::EventNotFound { event_id: id };
        assert!(err.to_string().contains(&id.to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
