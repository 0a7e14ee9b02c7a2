//! Driving port for booking lifecycle commands.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{Booking, BookingStatus, EmergencyContact, Error, UserId};

/// The customer identity captured on a booking.
///
/// Snapshotted onto the booking at creation so later profile edits do not
/// rewrite booking history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Request to book seats on a tour for a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookingRequest {
    pub tour_id: Uuid,
    pub customer: CustomerDetails,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_people: u32,
    pub special_requests: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
}

/// Request to move a booking to a new lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBookingStatusRequest {
    pub booking_id: Uuid,
    pub status: BookingStatus,
}

/// Request to cancel a booking and release its seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelBookingRequest {
    pub booking_id: Uuid,
    pub reason: Option<String>,
}

/// Use-case trait for creating and mutating bookings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Reserve seats and create a pending booking.
    async fn create(&self, request: CreateBookingRequest) -> Result<Booking, Error>;

    /// Move a booking along its lifecycle, rejecting illegal transitions.
    async fn update_status(&self, request: UpdateBookingStatusRequest) -> Result<Booking, Error>;

    /// Cancel a booking and return its seats to the tour's window.
    async fn cancel(&self, request: CancelBookingRequest) -> Result<Booking, Error>;
}
