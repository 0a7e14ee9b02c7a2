//! Port for the bookable tour catalogue.
//!
//! Besides lookups, the catalogue owns capacity: bookings reserve seats
//! through [`TourCatalogue::reserve_slots`], which must check and decrement
//! the matching availability window atomically so concurrent bookings cannot
//! oversell a window.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::TourService;

/// Errors surfaced by tour catalogue adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourCatalogueError {
    /// The requested tour does not exist.
    #[error("tour {tour_id} not found")]
    NotFound { tour_id: Uuid },
    /// No availability window covers the requested date range.
    #[error("tour {tour_id} has no availability window covering the requested dates")]
    NoMatchingWindow { tour_id: Uuid },
    /// The covering window has fewer seats than requested.
    #[error("tour {tour_id} capacity exhausted: {remaining} seats remaining")]
    CapacityExhausted { tour_id: Uuid, remaining: u32 },
    /// Catalogue backend is unavailable.
    #[error("tour catalogue connection failed: {message}")]
    Connection { message: String },
}

impl TourCatalogueError {
    /// Helper for missing tours.
    pub fn not_found(tour_id: Uuid) -> Self {
        Self::NotFound { tour_id }
    }

    /// Helper for uncovered date ranges.
    pub fn no_matching_window(tour_id: Uuid) -> Self {
        Self::NoMatchingWindow { tour_id }
    }

    /// Helper for exhausted windows.
    pub fn capacity_exhausted(tour_id: Uuid, remaining: u32) -> Self {
        Self::CapacityExhausted { tour_id, remaining }
    }

    /// Helper for connection failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }
}

/// Port for tour lookup and capacity management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TourCatalogue: Send + Sync {
    /// List every tour in the catalogue.
    async fn list_tours(&self) -> Result<Vec<TourService>, TourCatalogueError>;

    /// Fetch a tour by id. Returns `None` when unknown.
    async fn find_tour(&self, tour_id: &Uuid) -> Result<Option<TourService>, TourCatalogueError>;

    /// Atomically check and decrement capacity for the covering window.
    ///
    /// On success the returned [`TourService`] reflects the catalogue state
    /// BEFORE the decrement, so callers can snapshot pricing and provider
    /// details from it.
    async fn reserve_slots(
        &self,
        tour_id: &Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        seats: u32,
    ) -> Result<TourService, TourCatalogueError>;

    /// Return previously reserved seats to the covering window.
    ///
    /// Used on cancellation. Releasing against an unknown tour or window is
    /// an error; releasing more seats than were taken is the caller's bug
    /// and is not detected here.
    async fn release_slots(
        &self,
        tour_id: &Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        seats: u32,
    ) -> Result<(), TourCatalogueError>;
}
