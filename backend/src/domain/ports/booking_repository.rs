//! Port for booking persistence.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Booking, UserId};

/// Errors raised by booking repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingRepositoryError {
    /// Repository connection could not be established.
    #[error("booking repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("booking repository query failed: {message}")]
    Query { message: String },
}

impl BookingRepositoryError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for booking storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a newly created booking.
    async fn insert(&self, booking: &Booking) -> Result<(), BookingRepositoryError>;

    /// Fetch a booking by id. Returns `None` when unknown.
    async fn find_by_id(&self, booking_id: &Uuid)
    -> Result<Option<Booking>, BookingRepositoryError>;

    /// Replace a stored booking after a lifecycle mutation.
    async fn update(&self, booking: &Booking) -> Result<(), BookingRepositoryError>;

    /// List a customer's bookings, newest first.
    async fn list_for_customer(
        &self,
        customer_id: &UserId,
    ) -> Result<Vec<Booking>, BookingRepositoryError>;

    /// List bookings against a provider's tours, newest first.
    async fn list_for_provider(
        &self,
        provider_id: &Uuid,
    ) -> Result<Vec<Booking>, BookingRepositoryError>;
}

/// Fixture implementation that stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookingRepository;

#[async_trait]
impl BookingRepository for FixtureBookingRepository {
    async fn insert(&self, _booking: &Booking) -> Result<(), BookingRepositoryError> {
        Ok(())
    }

    async fn find_by_id(
        &self,
        _booking_id: &Uuid,
    ) -> Result<Option<Booking>, BookingRepositoryError> {
        Ok(None)
    }

    async fn update(&self, _booking: &Booking) -> Result<(), BookingRepositoryError> {
        Ok(())
    }

    async fn list_for_customer(
        &self,
        _customer_id: &UserId,
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_for_provider(
        &self,
        _provider_id: &Uuid,
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        Ok(Vec::new())
    }
}
