//! Driving port for booking reads.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Booking, Error, UserId};

/// Use-case trait for booking lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingQuery: Send + Sync {
    /// Fetch a single booking by id.
    async fn get(&self, booking_id: &Uuid) -> Result<Booking, Error>;

    /// List a customer's bookings, newest first.
    async fn list_for_customer(&self, customer_id: &UserId) -> Result<Vec<Booking>, Error>;

    /// List bookings taken against a provider's tours, newest first.
    async fn list_for_provider(&self, provider_id: &Uuid) -> Result<Vec<Booking>, Error>;
}
