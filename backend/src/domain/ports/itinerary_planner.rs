//! Driving port for itinerary synthesis.

use async_trait::async_trait;

use crate::domain::{Error, Itinerary, TravelPreferences, UserId};

/// Request to synthesise an itinerary for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateItineraryRequest {
    pub user_id: UserId,
    pub preferences: TravelPreferences,
}

/// Use-case trait for generating and listing itineraries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItineraryPlanner: Send + Sync {
    /// Synthesise a day-by-day itinerary from travel preferences and save it.
    async fn generate(&self, request: GenerateItineraryRequest) -> Result<Itinerary, Error>;

    /// List the itineraries previously generated for a user, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Itinerary>, Error>;
}
