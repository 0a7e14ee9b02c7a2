//! In-memory tour catalogue with seat accounting.

use std::str::FromStr;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use super::{read_guard, write_guard};
use crate::domain::ports::{TourCatalogue, TourCatalogueError};
use crate::domain::{AvailabilityWindow, Provider, TourService};

/// Errors raised while converting seed data into catalogue entries.
#[derive(Debug, Error)]
pub enum SeedCatalogueError {
    /// A seed identifier is not a valid UUID.
    #[error("seed tour '{name}' carries an invalid identifier: {source}")]
    InvalidId {
        name: String,
        #[source]
        source: uuid::Error,
    },
    /// A seed availability date is not a valid ISO 8601 date.
    #[error("seed tour '{name}' carries an invalid date: {source}")]
    InvalidDate {
        name: String,
        #[source]
        source: chrono::ParseError,
    },
}

fn convert_tour(seed: example_data::SeedTour) -> Result<TourService, SeedCatalogueError> {
    let parse_id = |value: &str| {
        Uuid::from_str(value).map_err(|source| SeedCatalogueError::InvalidId {
            name: seed.name.clone(),
            source,
        })
    };
    let parse_date = |value: &str| {
        NaiveDate::from_str(value).map_err(|source| SeedCatalogueError::InvalidDate {
            name: seed.name.clone(),
            source,
        })
    };

    let availability = seed
        .availability
        .iter()
        .map(|window| {
            Ok(AvailabilityWindow {
                start_date: parse_date(&window.start_date)?,
                end_date: parse_date(&window.end_date)?,
                available_slots: window.available_slots,
            })
        })
        .collect::<Result<Vec<_>, SeedCatalogueError>>()?;

    Ok(TourService {
        id: parse_id(&seed.id)?,
        provider: Provider {
            id: parse_id(&seed.provider.id)?,
            name: seed.provider.name,
            email: seed.provider.email,
            phone: seed.provider.phone,
        },
        name: seed.name,
        description: seed.description,
        price: seed.price,
        duration: seed.duration,
        location: seed.location,
        max_people: seed.max_people,
        amenities: seed.amenities,
        cancellation_policy: seed.cancellation_policy,
        rating: seed.rating,
        review_count: seed.review_count,
        availability,
    })
}

/// Tour catalogue holding its offerings and remaining capacity in memory.
///
/// Capacity mutations take the write lock for the whole check-and-decrement,
/// so concurrent bookings cannot oversell a window.
#[derive(Debug, Default)]
pub struct InMemoryTourCatalogue {
    tours: RwLock<Vec<TourService>>,
}

impl InMemoryTourCatalogue {
    /// Create a catalogue holding the given tours.
    pub fn new(tours: Vec<TourService>) -> Self {
        Self {
            tours: RwLock::new(tours),
        }
    }

    /// Create a catalogue from the example seed data.
    pub fn seeded() -> Result<Self, SeedCatalogueError> {
        let tours = example_data::seed_tours()
            .into_iter()
            .map(convert_tour)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(tours))
    }
}

#[async_trait]
impl TourCatalogue for InMemoryTourCatalogue {
    async fn list_tours(&self) -> Result<Vec<TourService>, TourCatalogueError> {
        Ok(read_guard(&self.tours).clone())
    }

    async fn find_tour(&self, tour_id: &Uuid) -> Result<Option<TourService>, TourCatalogueError> {
        Ok(read_guard(&self.tours)
            .iter()
            .find(|tour| tour.id == *tour_id)
            .cloned())
    }

    async fn reserve_slots(
        &self,
        tour_id: &Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        seats: u32,
    ) -> Result<TourService, TourCatalogueError> {
        let mut tours = write_guard(&self.tours);
        let tour = tours
            .iter_mut()
            .find(|tour| tour.id == *tour_id)
            .ok_or_else(|| TourCatalogueError::not_found(*tour_id))?;

        let snapshot = tour.clone();
        let window = tour
            .availability
            .iter_mut()
            .find(|window| window.covers(start_date, end_date))
            .ok_or_else(|| TourCatalogueError::no_matching_window(*tour_id))?;

        if window.available_slots < seats {
            return Err(TourCatalogueError::capacity_exhausted(
                *tour_id,
                window.available_slots,
            ));
        }
        window.available_slots -= seats;

        Ok(snapshot)
    }

    async fn release_slots(
        &self,
        tour_id: &Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        seats: u32,
    ) -> Result<(), TourCatalogueError> {
        let mut tours = write_guard(&self.tours);
        let tour = tours
            .iter_mut()
            .find(|tour| tour.id == *tour_id)
            .ok_or_else(|| TourCatalogueError::not_found(*tour_id))?;

        let window = tour
            .availability
            .iter_mut()
            .find(|window| window.covers(start_date, end_date))
            .ok_or_else(|| TourCatalogueError::no_matching_window(*tour_id))?;

        window.available_slots = window.available_slots.saturating_add(seats);
        Ok(())
    }
}
