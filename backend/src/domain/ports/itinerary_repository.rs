//! Port for itinerary persistence.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Itinerary, UserId};

/// Errors raised by itinerary repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItineraryRepositoryError {
    /// Repository connection could not be established.
    #[error("itinerary repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("itinerary repository query failed: {message}")]
    Query { message: String },
}

impl ItineraryRepositoryError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for storing and listing generated itineraries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    /// Persist a generated itinerary.
    async fn save(&self, itinerary: &Itinerary) -> Result<(), ItineraryRepositoryError>;

    /// List a user's saved itineraries, newest first.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Itinerary>, ItineraryRepositoryError>;
}

/// Fixture implementation that discards saves and lists nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureItineraryRepository;

#[async_trait]
impl ItineraryRepository for FixtureItineraryRepository {
    async fn save(&self, _itinerary: &Itinerary) -> Result<(), ItineraryRepositoryError> {
        Ok(())
    }

    async fn list_for_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<Itinerary>, ItineraryRepositoryError> {
        Ok(Vec::new())
    }
}
