//! Booking domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A booking linking an email address to an event.
///
/// The referenced event must exist when the booking is written; the write
/// path enforces this before persistence.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,

    /// Identifier of the booked event
    pub event_id: Uuid,

    /// Attendee email address
    pub email: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a booking.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookingInput {
    /// Identifier of the event being booked
    pub event_id: Uuid,

    /// Attendee email address
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
}

impl Booking {
    /// Build a new booking from validated input.
    pub fn from_input(input: BookingInput) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            event_id: input.event_id,
            email: input.email.trim().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_input_accepts_plain_email() {
        let input = BookingInput {
            event_id: Uuid::now_v7(),
            email: "person@example.com".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_booking_input_rejects_invalid_email() {
        let input = BookingInput {
            event_id: Uuid::now_v7(),
            email: "not-an-email".to_string(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_from_input_trims_email() {
        let input = BookingInput {
            event_id: Uuid::now_v7(),
            email: " person@example.com ".to_string(),
        };
        let booking = Booking::from_input(input);
        assert_eq!(booking.email, "person@example.com");
    }
}
