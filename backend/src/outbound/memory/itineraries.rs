//! In-memory itinerary repository.

use std::sync::RwLock;

use async_trait::async_trait;

use super::{read_guard, write_guard};
use crate::domain::ports::{ItineraryRepository, ItineraryRepositoryError};
use crate::domain::{Itinerary, UserId};

/// Itinerary store over a guarded vector.
#[derive(Debug, Default)]
pub struct InMemoryItineraryRepository {
    itineraries: RwLock<Vec<Itinerary>>,
}

impl InMemoryItineraryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItineraryRepository for InMemoryItineraryRepository {
    async fn save(&self, itinerary: &Itinerary) -> Result<(), ItineraryRepositoryError> {
        write_guard(&self.itineraries).push(itinerary.clone());
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Itinerary>, ItineraryRepositoryError> {
        let itineraries = read_guard(&self.itineraries);
        let mut matched: Vec<Itinerary> = itineraries
            .iter()
            .filter(|itinerary| itinerary.user_id == *user_id)
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }
}
