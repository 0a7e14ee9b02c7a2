//! Port for itinerary synthesis source data.
//!
//! Supplies the per-destination activity templates and style-keyed
//! accommodation tiers the synthesiser expands into priced day plans. The
//! data is static per process, so the port is synchronous.

use crate::domain::{Accommodation, ActivityTemplate, TravelStyle};

/// Port for activity templates and accommodation tiers.
#[cfg_attr(test, mockall::automock)]
pub trait ActivityCatalogue: Send + Sync {
    /// The ordered templates for a destination.
    ///
    /// Destinations without an explicit template list fall back to the
    /// default destination's list, so this never returns an empty vector for
    /// a seeded catalogue.
    fn templates_for(&self, destination: &str) -> Vec<ActivityTemplate>;

    /// The accommodation tier for a travel style.
    fn accommodation_for(&self, style: TravelStyle) -> Accommodation;
}

/// Fixture implementation with a single template and a flat tier.
///
/// Use it in unit tests where template content is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureActivityCatalogue;

impl ActivityCatalogue for FixtureActivityCatalogue {
    fn templates_for(&self, _destination: &str) -> Vec<ActivityTemplate> {
        vec![ActivityTemplate {
            name: "City walk".to_owned(),
            description: "A guided walk through the old quarter".to_owned(),
            location: "Old Quarter".to_owned(),
            category: "Sightseeing".to_owned(),
            base_cost: 100_000,
        }]
    }

    fn accommodation_for(&self, _style: TravelStyle) -> Accommodation {
        Accommodation {
            name: "Guesthouse".to_owned(),
            kind: "Hotel".to_owned(),
            price: 300_000,
            rating: 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_catalogue_serves_any_destination() {
        let catalogue = FixtureActivityCatalogue;
        assert!(!catalogue.templates_for("Nowhere").is_empty());
        assert_eq!(
            catalogue.accommodation_for(TravelStyle::Luxury).price,
            300_000
        );
    }
}
