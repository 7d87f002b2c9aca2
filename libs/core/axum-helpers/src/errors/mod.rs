pub mod handlers;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Domain crates map their typed errors onto this shape so clients see
/// a consistent body on every error path:
/// - `error`: Human-readable error message
/// - `message`: Optional context for the failing operation
///
/// # JSON Example
///
/// ```json
/// {
///   "message": "error fetching events",
///   "error": "server selection timeout"
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Optional context naming the operation that failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Error body with just an error message
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            message: None,
            error: error.into(),
        }
    }

    /// Error body with operation context plus the underlying error
    pub fn with_context(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: error.into(),
        }
    }
}
