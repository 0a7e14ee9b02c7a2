//! Itinerary synthesis domain service.
//!
//! Implements the [`ItineraryPlanner`] driving port: expands validated
//! [`TravelPreferences`] into a priced day-by-day plan using per-destination
//! activity templates and style-keyed accommodation tiers, then persists the
//! result. Time and randomness are injected so generation is reproducible
//! under test.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use uuid::Uuid;

use crate::domain::money::{format_vnd, scale_by_percent};
use crate::domain::ports::{
    ActivityCatalogue, Entropy, GenerateItineraryRequest, ItineraryPlanner, ItineraryRepository,
    ItineraryRepositoryError,
};
use crate::domain::{
    Activity, Error, Itinerary, ItineraryDay, StyleMultipliers, TravelPreferences, UserId,
};

/// Ordered time-slot labels assigned to activities by position within a day.
const TIME_SLOTS: [&str; 3] = ["09:00 - 12:00", "14:00 - 17:00", "19:00 - 21:00"];

/// Share of the stated budget reported as the cost estimate.
const ESTIMATE_PERCENT: u32 = 85;

fn map_repository_error(error: ItineraryRepositoryError) -> Error {
    match error {
        ItineraryRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("itinerary repository unavailable: {message}"))
        }
        ItineraryRepositoryError::Query { message } => {
            Error::internal(format!("itinerary repository error: {message}"))
        }
    }
}

/// Itinerary service implementing the planner driving port.
#[derive(Clone)]
pub struct ItineraryService<R, C> {
    itinerary_repo: Arc<R>,
    catalogue: Arc<C>,
    clock: Arc<dyn Clock>,
    entropy: Arc<dyn Entropy>,
    multipliers: StyleMultipliers,
}

impl<R, C> ItineraryService<R, C> {
    /// Create a new planner service.
    pub fn new(
        itinerary_repo: Arc<R>,
        catalogue: Arc<C>,
        clock: Arc<dyn Clock>,
        entropy: Arc<dyn Entropy>,
        multipliers: StyleMultipliers,
    ) -> Self {
        Self {
            itinerary_repo,
            catalogue,
            clock,
            entropy,
            multipliers,
        }
    }
}

impl<R, C> ItineraryService<R, C>
where
    C: ActivityCatalogue,
{
    fn synthesise_days(
        &self,
        preferences: &TravelPreferences,
        start: chrono::NaiveDate,
    ) -> Vec<ItineraryDay> {
        let templates = self.catalogue.templates_for(&preferences.destination);
        let mut days = Vec::with_capacity(preferences.duration_days as usize);

        for day in 1..=preferences.duration_days {
            // Day one is arrival day and gets a lighter schedule.
            let slots = if day == 1 { 2 } else { 3 };
            let activities: Vec<Activity> = templates
                .iter()
                .take(slots)
                .enumerate()
                .map(|(index, template)| Activity {
                    id: format!("{day}-{index}"),
                    name: template.name.clone(),
                    description: template.description.clone(),
                    location: template.location.clone(),
                    duration: "2-3 hours".to_owned(),
                    cost: self
                        .multipliers
                        .scale(template.base_cost, preferences.travel_style),
                    category: template.category.clone(),
                    rating: 4.5 + self.entropy.unit() * 0.5,
                    time_slot: TIME_SLOTS[index.min(TIME_SLOTS.len() - 1)].to_owned(),
                })
                .collect();

            let accommodation = (day < preferences.duration_days)
                .then(|| self.catalogue.accommodation_for(preferences.travel_style));

            let total_cost = activities.iter().map(|activity| activity.cost).sum::<i64>()
                + accommodation
                    .as_ref()
                    .map_or(0, |accommodation| accommodation.price);

            days.push(ItineraryDay {
                day,
                date: start + chrono::Duration::days(i64::from(day) - 1),
                activities,
                accommodation,
                total_cost,
            });
        }

        days
    }

    fn highlights(preferences: &TravelPreferences) -> Vec<String> {
        vec![
            format!(
                "Experience {} in {}",
                preferences.interests.join(", "),
                preferences.destination
            ),
            format!("Fits a budget of {}", format_vnd(preferences.budget)),
            format!("Designed for {} people", preferences.group_size),
            format!("A {} travel style", preferences.travel_style.label()),
        ]
    }

    fn tips() -> Vec<String> {
        [
            "Book activities in advance for better prices",
            "Bring sunscreen and drinking water",
            "Check the weather before departure",
            "Keep some cash on hand for small expenses",
        ]
        .map(str::to_owned)
        .to_vec()
    }
}

#[async_trait]
impl<R, C> ItineraryPlanner for ItineraryService<R, C>
where
    R: ItineraryRepository,
    C: ActivityCatalogue,
{
    async fn generate(&self, request: GenerateItineraryRequest) -> Result<Itinerary, Error> {
        let GenerateItineraryRequest {
            user_id,
            preferences,
        } = request;

        preferences
            .validate()
            .map_err(|err| Error::invalid_request(format!("invalid travel preferences: {err}")))?;

        let now = self.clock.utc();
        let days = self.synthesise_days(&preferences, now.date_naive());

        let itinerary = Itinerary {
            id: Uuid::new_v4(),
            title: format!(
                "Discover {} in {} days",
                preferences.destination, preferences.duration_days
            ),
            destination: preferences.destination.clone(),
            duration_days: preferences.duration_days,
            total_budget: preferences.budget,
            estimated_cost: scale_by_percent(preferences.budget, ESTIMATE_PERCENT),
            days,
            highlights: Self::highlights(&preferences),
            tips: Self::tips(),
            created_at: now,
            user_id,
        };

        self.itinerary_repo
            .save(&itinerary)
            .await
            .map_err(map_repository_error)?;

        Ok(itinerary)
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Itinerary>, Error> {
        self.itinerary_repo
            .list_for_user(user_id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "itinerary_service_tests.rs"]
mod tests;
