//! Booking lifecycle domain service.
//!
//! Implements the [`BookingCommand`] and [`BookingQuery`] driving ports.
//! Creation snapshots tour pricing and provider details onto the booking and
//! reserves seats through the catalogue, which owns capacity; cancellation
//! returns the seats to the window the booking was taken from.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{
    BookingCommand, BookingQuery, BookingRepository, BookingRepositoryError, CancelBookingRequest,
    CreateBookingRequest, TourCatalogue, TourCatalogueError, UpdateBookingStatusRequest,
};
use crate::domain::{
    Booking, BookingNumber, BookingStatus, Error, PaymentState, TourService, UserId,
};

fn map_repository_error(error: BookingRepositoryError) -> Error {
    match error {
        BookingRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("booking repository unavailable: {message}"))
        }
        BookingRepositoryError::Query { message } => {
            Error::internal(format!("booking repository error: {message}"))
        }
    }
}

fn map_catalogue_error(error: TourCatalogueError) -> Error {
    match error {
        TourCatalogueError::NotFound { tour_id } => {
            Error::not_found(format!("tour {tour_id} not found"))
        }
        TourCatalogueError::NoMatchingWindow { tour_id } => Error::invalid_request(format!(
            "tour {tour_id} has no availability window covering the requested dates"
        )),
        TourCatalogueError::CapacityExhausted { tour_id, remaining } => Error::conflict(format!(
            "tour {tour_id} capacity exhausted: {remaining} seats remaining"
        )),
        TourCatalogueError::Connection { message } => {
            Error::service_unavailable(format!("tour catalogue unavailable: {message}"))
        }
    }
}

/// Booking service implementing the command and query driving ports.
#[derive(Clone)]
pub struct BookingService<R, C> {
    booking_repo: Arc<R>,
    catalogue: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<R, C> BookingService<R, C> {
    /// Create a new booking service.
    pub fn new(booking_repo: Arc<R>, catalogue: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            booking_repo,
            catalogue,
            clock,
        }
    }
}

impl<R, C> BookingService<R, C>
where
    R: BookingRepository,
    C: TourCatalogue,
{
    async fn load_booking(&self, booking_id: &Uuid) -> Result<Booking, Error> {
        self.booking_repo
            .find_by_id(booking_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("booking {booking_id} not found")))
    }

    /// Return the booking's seats to the window they were taken from.
    ///
    /// Catalogue lookup failures here indicate drift between the booking
    /// store and the catalogue, so they surface as internal errors rather
    /// than client faults.
    async fn release_seats(&self, booking: &Booking) -> Result<(), Error> {
        self.catalogue
            .release_slots(
                &booking.service_id,
                booking.start_date,
                booking.end_date,
                booking.number_of_people,
            )
            .await
            .map_err(|error| match error {
                TourCatalogueError::Connection { message } => Error::service_unavailable(format!(
                    "tour catalogue unavailable: {message}"
                )),
                other => Error::internal(format!("seat release failed: {other}")),
            })
    }

    fn validate_create(request: &CreateBookingRequest, tour: &TourService) -> Result<(), Error> {
        if request.number_of_people == 0 {
            return Err(Error::invalid_request("number of people must be at least one"));
        }
        if request.number_of_people > tour.max_people {
            return Err(Error::invalid_request(format!(
                "party of {} exceeds the tour maximum of {}",
                request.number_of_people, tour.max_people
            )));
        }
        if request.end_date < request.start_date {
            return Err(Error::invalid_request("end date precedes start date"));
        }
        Ok(())
    }
}

#[async_trait]
impl<R, C> BookingCommand for BookingService<R, C>
where
    R: BookingRepository,
    C: TourCatalogue,
{
    async fn create(&self, request: CreateBookingRequest) -> Result<Booking, Error> {
        let tour = self
            .catalogue
            .find_tour(&request.tour_id)
            .await
            .map_err(map_catalogue_error)?
            .ok_or_else(|| Error::not_found(format!("tour {} not found", request.tour_id)))?;

        Self::validate_create(&request, &tour)?;

        // reserve_slots re-resolves the tour so the check-and-decrement is
        // atomic in the catalogue; the returned snapshot predates the
        // decrement and is the one pricing is taken from.
        let snapshot = self
            .catalogue
            .reserve_slots(
                &request.tour_id,
                request.start_date,
                request.end_date,
                request.number_of_people,
            )
            .await
            .map_err(map_catalogue_error)?;

        let now = self.clock.utc();
        let booking = Booking {
            id: Uuid::new_v4(),
            booking_number: BookingNumber::from_timestamp(&now),
            service_id: snapshot.id,
            service_name: snapshot.name.clone(),
            provider_id: snapshot.provider.id,
            provider_name: snapshot.provider.name.clone(),
            customer_id: request.customer.id,
            customer_name: request.customer.name,
            customer_email: request.customer.email,
            customer_phone: request.customer.phone,
            start_date: request.start_date,
            end_date: request.end_date,
            number_of_people: request.number_of_people,
            total_amount: snapshot
                .price
                .saturating_mul(i64::from(request.number_of_people)),
            status: BookingStatus::Pending,
            payment_state: PaymentState::Pending,
            special_requests: request.special_requests,
            emergency_contact: request.emergency_contact,
            cancellation_reason: None,
            created_at: now,
            updated_at: now,
        };

        self.booking_repo
            .insert(&booking)
            .await
            .map_err(map_repository_error)?;

        Ok(booking)
    }

    async fn update_status(&self, request: UpdateBookingStatusRequest) -> Result<Booking, Error> {
        let mut booking = self.load_booking(&request.booking_id).await?;

        booking
            .transition_to(request.status, self.clock.utc())
            .map_err(|err| Error::illegal_transition(err.to_string()))?;

        if request.status == BookingStatus::Cancelled {
            self.release_seats(&booking).await?;
        }

        self.booking_repo
            .update(&booking)
            .await
            .map_err(map_repository_error)?;

        Ok(booking)
    }

    async fn cancel(&self, request: CancelBookingRequest) -> Result<Booking, Error> {
        let reason = request
            .reason
            .as_deref()
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
            .ok_or_else(|| Error::invalid_request("cancellation reason must not be empty"))?;

        let mut booking = self.load_booking(&request.booking_id).await?;

        booking
            .cancel(reason, self.clock.utc())
            .map_err(|err| Error::illegal_transition(err.to_string()))?;

        self.release_seats(&booking).await?;

        self.booking_repo
            .update(&booking)
            .await
            .map_err(map_repository_error)?;

        Ok(booking)
    }
}

#[async_trait]
impl<R, C> BookingQuery for BookingService<R, C>
where
    R: BookingRepository,
    C: TourCatalogue,
{
    async fn get(&self, booking_id: &Uuid) -> Result<Booking, Error> {
        self.load_booking(booking_id).await
    }

    async fn list_for_customer(&self, customer_id: &UserId) -> Result<Vec<Booking>, Error> {
        self.booking_repo
            .list_for_customer(customer_id)
            .await
            .map_err(map_repository_error)
    }

    async fn list_for_provider(&self, provider_id: &Uuid) -> Result<Vec<Booking>, Error> {
        self.booking_repo
            .list_for_provider(provider_id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
