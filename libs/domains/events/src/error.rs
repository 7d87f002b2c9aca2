//! Event domain error types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::ErrorResponse;

use crate::normalize::NormalizeError;

/// Result type for event operations
pub type Result<T> = std::result::Result<T, EventError>;

/// Event domain errors
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// No event matches the requested slug
    #[error("Event with slug \"{slug}\" not found")]
    NotFound { slug: String },

    /// Path parameter is blank after trimming
    #[error("Invalid slug parameter")]
    InvalidSlug,

    /// Multipart form could not be parsed
    #[error("Invalid form data: {0}")]
    InvalidForm(String),

    /// Create form did not include an image file
    #[error("Image file is required")]
    MissingImage,

    /// Schema or format constraint violated on write
    #[error("{0}")]
    Validation(String),

    /// Image upload to the asset host failed
    #[error("Image upload failed: {0}")]
    Upload(String),

    /// MongoDB failure
    #[error("Database error: {0}")]
    Database(String),
}

impl From<validator::ValidationErrors> for EventError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<NormalizeError> for EventError {
    fn from(err: NormalizeError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<mongodb::error::Error> for EventError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<database::mongodb::MongoError> for EventError {
    fn from(err: database::mongodb::MongoError) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for EventError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        Self::Database(format!("BSON serialization error: {}", err))
    }
}

impl From<reqwest::Error> for EventError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upload(err.to_string())
    }
}

impl EventError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidSlug | Self::InvalidForm(_) | Self::MissingImage => {
                StatusCode::BAD_REQUEST
            }
            // Write-time constraint violations surface as failed writes, same
            // as infrastructure errors. There is no dedicated 422 path.
            Self::Validation(_) | Self::Upload(_) | Self::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_slug() {
        let err = EventError::NotFound {
            slug: "rust-meetup".to_string(),
        };
        assert!(err.to_string().contains("rust-meetup"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(EventError::InvalidSlug.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(EventError::MissingImage.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            EventError::InvalidForm("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_write_failures_map_to_500() {
        assert_eq!(
            EventError::Validation("bad time".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            EventError::Upload("cdn down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
