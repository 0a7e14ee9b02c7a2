//! In-memory booking repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use super::{read_guard, write_guard};
use crate::domain::ports::{BookingRepository, BookingRepositoryError};
use crate::domain::{Booking, UserId};

/// Booking store over a guarded map.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<HashMap<Uuid, Booking>>,
}

impl InMemoryBookingRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_sorted(&self, keep: impl Fn(&Booking) -> bool) -> Vec<Booking> {
        let bookings = read_guard(&self.bookings);
        let mut matched: Vec<Booking> = bookings
            .values()
            .filter(|booking| keep(booking))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn insert(&self, booking: &Booking) -> Result<(), BookingRepositoryError> {
        write_guard(&self.bookings).insert(booking.id, booking.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        booking_id: &Uuid,
    ) -> Result<Option<Booking>, BookingRepositoryError> {
        Ok(read_guard(&self.bookings).get(booking_id).cloned())
    }

    async fn update(&self, booking: &Booking) -> Result<(), BookingRepositoryError> {
        let mut bookings = write_guard(&self.bookings);
        if !bookings.contains_key(&booking.id) {
            return Err(BookingRepositoryError::query(format!(
                "booking {} does not exist",
                booking.id
            )));
        }
        bookings.insert(booking.id, booking.clone());
        Ok(())
    }

    async fn list_for_customer(
        &self,
        customer_id: &UserId,
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        Ok(self.collect_sorted(|booking| booking.customer_id == *customer_id))
    }

    async fn list_for_provider(
        &self,
        provider_id: &Uuid,
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        Ok(self.collect_sorted(|booking| booking.provider_id == *provider_id))
    }
}
