//! Bookable tour offerings.
//!
//! A [`TourService`] is the unit travellers book: provider, per-person price,
//! capacity, and dated availability windows carrying remaining slots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact details for the company offering a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Stable provider identifier.
    pub id: Uuid,
    /// Display name of the providing company.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

/// A bookable date window with remaining capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWindow {
    /// Inclusive window start.
    pub start_date: NaiveDate,
    /// Inclusive window end.
    pub end_date: NaiveDate,
    /// Seats remaining in this window.
    pub available_slots: u32,
}

impl AvailabilityWindow {
    /// Whether this window fully covers the requested date range.
    pub fn covers(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= start && end <= self.end_date
    }
}

/// A bookable tour offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourService {
    /// Stable tour identifier.
    pub id: Uuid,
    /// Display title of the tour.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// The provider offering this tour.
    pub provider: Provider,
    /// Price per person in VND.
    pub price: i64,
    /// Human-readable duration label.
    pub duration: String,
    /// Departure location.
    pub location: String,
    /// Maximum party size per booking.
    pub max_people: u32,
    /// Included amenities.
    pub amenities: Vec<String>,
    /// Free-text cancellation policy.
    pub cancellation_policy: String,
    /// Aggregate customer rating.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Bookable windows with remaining capacity.
    pub availability: Vec<AvailabilityWindow>,
}

impl TourService {
    /// Find the availability window covering the requested range, if any.
    pub fn window_covering(&self, start: NaiveDate, end: NaiveDate) -> Option<&AvailabilityWindow> {
        self.availability
            .iter()
            .find(|window| window.covers(start, end))
    }
}
