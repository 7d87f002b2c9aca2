//! Booking service layer

use crate::error::{BookingError, Result};
use crate::models::{Booking, BookingInput};
use crate::repository::BookingRepository;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

/// Booking service enforcing the referential event check before writes.
pub struct BookingService<R: BookingRepository> {
    repository: R,
}

impl<R: BookingRepository> BookingService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create a booking after confirming the referenced event exists.
    ///
    /// A missing event fails the write; no booking record is persisted.
    #[instrument(skip(self, input), fields(event_id = %input.event_id))]
    pub async fn create(&self, input: BookingInput) -> Result<Booking> {
        input.validate()?;

        if !self.repository.event_exists(&input.event_id).await? {
            return Err(BookingError::EventNotFound {
                event_id: input.event_id,
            });
        }

        let booking = self.repository.create(Booking::from_input(input)).await?;
        info!(booking_id = %booking.id, "Booking created");
        Ok(booking)
    }

    /// List bookings, optionally restricted to one event.
    #[instrument(skip(self))]
    pub async fn list(&self, event_id: Option<Uuid>) -> Result<Vec<Booking>> {
        match event_id {
            Some(id) => self.repository.list_by_event(&id).await,
            None => self.repository.list().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockBookingRepository;

    fn sample_input() -> BookingInput {
        BookingInput {
            event_id: Uuid::now_v7(),
            email: "person@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_persists_when_event_exists() {
        let mut repo = MockBookingRepository::new();
        repo.expect_event_exists().returning(|_| Ok(true));
        repo.expect_create().returning(|booking| Ok(booking));

        let service = BookingService::new(repo);
        let input = sample_input();
        let event_id = input.event_id;

        let booking = service.create(input).await.unwrap();
        assert_eq!(booking.event_id, event_id);
        assert_eq!(booking.email, "person@example.com");
    }

    #[tokio::test]
    async fn test_create_missing_event_persists_nothing() {
        let mut repo = MockBookingRepository::new();
        repo.expect_event_exists().returning(|_| Ok(false));
        // No create expectation: a persistence call panics the test.

        let service = BookingService::new(repo);
        let input = sample_input();
        let event_id = input.event_id;

        let err = service.create(input).await.unwrap_err();
        assert!(matches!(err, BookingError::EventNotFound { .. }));
        assert!(err.to_string().contains(&event_id.to_string()));
    }

    #[tokio::test]
    async fn test_create_invalid_email_fails_before_any_io() {
        // No expectations: any repository call panics.
        let repo = MockBookingRepository::new();

        let service = BookingService::new(repo);
        let mut input = sample_input();
        input.email = "not-an-email".to_string();

        let err = service.create(input).await.unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_scopes_to_event_when_given() {
        let target = Uuid::now_v7();
        let mut repo = MockBookingRepository::new();
        repo.expect_list_by_event()
            .withf(move |id| *id == target)
            .returning(|_| Ok(Vec::new()));

        let service = BookingService::new(repo);
        service.list(Some(target)).await.unwrap();
    }
}
