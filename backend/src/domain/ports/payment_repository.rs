//! Port for payment persistence.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::Payment;

/// Errors raised by payment repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentRepositoryError {
    /// Repository connection could not be established.
    #[error("payment repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("payment repository query failed: {message}")]
    Query { message: String },
}

impl PaymentRepositoryError {
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

/// Port for payment storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Record a resolved charge attempt unless the booking is already settled.
    ///
    /// Adapters must perform the completed-payment check and the insert as
    /// one operation so concurrent charges against the same booking cannot
    /// both be recorded as completed. Returns the existing completed payment
    /// when the insert was skipped, `None` when `payment` was stored.
    async fn insert_unless_completed(
        &self,
        payment: &Payment,
    ) -> Result<Option<Payment>, PaymentRepositoryError>;

    /// Fetch a payment by id. Returns `None` when unknown.
    async fn find_by_id(&self, payment_id: &Uuid)
    -> Result<Option<Payment>, PaymentRepositoryError>;

    /// The completed payment for a booking, if one exists.
    ///
    /// Backs the per-booking idempotency guarantee: at most one completed
    /// payment is ever recorded per booking.
    async fn find_completed_for_booking(
        &self,
        booking_id: &Uuid,
    ) -> Result<Option<Payment>, PaymentRepositoryError>;

    /// Replace a stored payment after a refund.
    async fn update(&self, payment: &Payment) -> Result<(), PaymentRepositoryError>;

    /// List every charge attempt against a booking, newest first.
    async fn list_for_booking(
        &self,
        booking_id: &Uuid,
    ) -> Result<Vec<Payment>, PaymentRepositoryError>;
}

/// Fixture implementation that stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePaymentRepository;

#[async_trait]
impl PaymentRepository for FixturePaymentRepository {
    async fn insert_unless_completed(
        &self,
        _payment: &Payment,
    ) -> Result<Option<Payment>, PaymentRepositoryError> {
        Ok(None)
    }

    async fn find_by_id(
        &self,
        _payment_id: &Uuid,
    ) -> Result<Option<Payment>, PaymentRepositoryError> {
        Ok(None)
    }

    async fn find_completed_for_booking(
        &self,
        _booking_id: &Uuid,
    ) -> Result<Option<Payment>, PaymentRepositoryError> {
        Ok(None)
    }

    async fn update(&self, _payment: &Payment) -> Result<(), PaymentRepositoryError> {
        Ok(())
    }

    async fn list_for_booking(
        &self,
        _booking_id: &Uuid,
    ) -> Result<Vec<Payment>, PaymentRepositoryError> {
        Ok(Vec::new())
    }
}
