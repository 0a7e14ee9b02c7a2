//! Generated itinerary aggregates.
//!
//! An [`Itinerary`] is a multi-day plan synthesised from
//! [`TravelPreferences`](crate::domain::TravelPreferences): ordered days, each
//! carrying priced activities and (except the final day) an accommodation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// A canned activity that synthesis expands into a priced itinerary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTemplate {
    /// Display name of the activity.
    pub name: String,
    /// Short description shown on the itinerary.
    pub description: String,
    /// Where the activity takes place.
    pub location: String,
    /// Category tag (sightseeing, culture, sport, ...).
    pub category: String,
    /// Unscaled cost in VND before the travel-style multiplier.
    pub base_cost: i64,
}

/// A single scheduled activity within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Identifier scoped to its day, e.g. `2-1` for day 2, slot 1.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Where the activity takes place.
    pub location: String,
    /// Human-readable duration label.
    pub duration: String,
    /// Style-scaled cost in VND.
    pub cost: i64,
    /// Category tag.
    pub category: String,
    /// Rating in [4.5, 5.0); jittered per generation.
    pub rating: f64,
    /// Time slot label assigned by position within the day.
    pub time_slot: String,
}

/// Style-determined overnight accommodation.
///
/// A value object: tiers are fixed per travel style and never persisted
/// independently of the itinerary carrying them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    /// Display name of the accommodation.
    pub name: String,
    /// Accommodation kind (Hotel, Resort, ...).
    pub kind: String,
    /// Nightly price in VND.
    pub price: i64,
    /// Typical guest rating for the tier.
    pub rating: f64,
}

/// One day of a generated itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    /// Day index, 1-based within the itinerary.
    pub day: u32,
    /// Calendar date, offset from the generation date.
    pub date: NaiveDate,
    /// Scheduled activities in time-slot order.
    pub activities: Vec<Activity>,
    /// Overnight stay; absent on the final day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<Accommodation>,
    /// Sum of activity costs plus the accommodation price.
    pub total_cost: i64,
}

/// A generated multi-day travel plan.
///
/// `estimated_cost` is a budget-fit heuristic (85% of the total budget,
/// floored) and is deliberately not reconciled with the sum of the itemised
/// day totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// Stable identifier.
    pub id: Uuid,
    /// Display title, derived from destination and duration.
    pub title: String,
    /// Requested destination.
    pub destination: String,
    /// Trip length in days; `days` always has exactly this many entries.
    pub duration_days: u32,
    /// The traveller's stated budget in VND.
    pub total_budget: i64,
    /// Budget-fit estimate in VND, never exceeding `total_budget`.
    pub estimated_cost: i64,
    /// Ordered day plans, indices 1..=duration_days.
    pub days: Vec<ItineraryDay>,
    /// Human-readable strings summarising the request.
    pub highlights: Vec<String>,
    /// Static packing/preparation advice.
    pub tips: Vec<String>,
    /// Generation timestamp.
    pub created_at: DateTime<Utc>,
    /// The traveller the plan was generated for.
    pub user_id: UserId,
}
