//! Seeded activity catalogue for itinerary synthesis.

use std::collections::HashMap;

use crate::domain::ports::ActivityCatalogue;
use crate::domain::{Accommodation, ActivityTemplate, TravelStyle};

fn convert_template(seed: &example_data::SeedActivityTemplate) -> ActivityTemplate {
    ActivityTemplate {
        name: seed.name.clone(),
        description: seed.description.clone(),
        location: seed.location.clone(),
        category: seed.category.clone(),
        base_cost: seed.base_cost,
    }
}

fn convert_tier(seed: &example_data::SeedAccommodationTier) -> Accommodation {
    Accommodation {
        name: seed.name.clone(),
        kind: seed.kind.clone(),
        price: seed.price,
        rating: seed.rating,
    }
}

/// Activity catalogue built from the example seed data.
///
/// Static per process: templates and tiers never change after construction,
/// so no locking is needed.
#[derive(Debug)]
pub struct SeededActivityCatalogue {
    templates: HashMap<String, Vec<ActivityTemplate>>,
    fallback: Vec<ActivityTemplate>,
    budget_tier: Accommodation,
    comfort_tier: Accommodation,
    luxury_tier: Accommodation,
}

impl SeededActivityCatalogue {
    /// Build the catalogue from the seeded destinations and tiers.
    ///
    /// Panics in debug builds if the seed data lacks the default destination
    /// or one of the three tiers; the example-data tests pin both.
    pub fn seeded() -> Self {
        let mut templates: HashMap<String, Vec<ActivityTemplate>> = HashMap::new();
        for seed in example_data::destination_templates() {
            templates.insert(
                seed.destination.clone(),
                seed.activities.iter().map(convert_template).collect(),
            );
        }
        let fallback = templates
            .get(example_data::DEFAULT_DESTINATION)
            .cloned()
            .unwrap_or_default();
        debug_assert!(!fallback.is_empty(), "default destination must be seeded");

        let tiers = example_data::accommodation_tiers();
        let tier_for = |style: &str| {
            tiers
                .iter()
                .find(|tier| tier.style == style)
                .map(convert_tier)
        };
        let missing_tier = || Accommodation {
            name: "Standard hotel".to_owned(),
            kind: "Hotel".to_owned(),
            price: 0,
            rating: 0.0,
        };

        Self {
            fallback,
            budget_tier: tier_for("budget").unwrap_or_else(missing_tier),
            comfort_tier: tier_for("comfort").unwrap_or_else(missing_tier),
            luxury_tier: tier_for("luxury").unwrap_or_else(missing_tier),
            templates,
        }
    }
}

impl ActivityCatalogue for SeededActivityCatalogue {
    fn templates_for(&self, destination: &str) -> Vec<ActivityTemplate> {
        self.templates
            .get(destination)
            .unwrap_or(&self.fallback)
            .clone()
    }

    fn accommodation_for(&self, style: TravelStyle) -> Accommodation {
        match style {
            TravelStyle::Budget => self.budget_tier.clone(),
            TravelStyle::Comfort => self.comfort_tier.clone(),
            TravelStyle::Luxury => self.luxury_tier.clone(),
        }
    }
}
