//! Activity templates and accommodation tiers used by itinerary synthesis.

use serde::{Deserialize, Serialize};

/// Destination whose templates are used when a requested destination has no
/// explicit entry.
pub const DEFAULT_DESTINATION: &str = "Ha Long";

/// A canned activity that synthesis expands into a priced itinerary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedActivityTemplate {
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

/// The ordered activity templates for one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSeed {
    /// Destination key matched against `TravelPreferences.destination`.
    pub destination: String,
    /// Templates in presentation order; synthesis selects from the front.
    pub activities: Vec<SeedActivityTemplate>,
}

/// A style-keyed accommodation tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedAccommodationTier {
    /// Travel style key: `budget`, `comfort`, or `luxury`.
    pub style: String,
    /// Display name of the accommodation.
    pub name: String,
    /// Accommodation kind (Hotel, Resort, ...).
    pub kind: String,
    /// Nightly price in VND.
    pub price: i64,
    /// Typical guest rating for the tier.
    pub rating: f64,
}

fn template(
    name: &str,
    description: &str,
    location: &str,
    category: &str,
    base_cost: i64,
) -> SeedActivityTemplate {
    SeedActivityTemplate {
        name: name.to_owned(),
        description: description.to_owned(),
        location: location.to_owned(),
        category: category.to_owned(),
        base_cost,
    }
}

/// Build the per-destination activity template lists.
pub fn destination_templates() -> Vec<DestinationSeed> {
    vec![
        DestinationSeed {
            destination: "Ha Long".to_owned(),
            activities: vec![
                template(
                    "Ha Long Bay cruise",
                    "Explore Ha Long Bay by cruise boat",
                    "Ha Long Bay",
                    "Sightseeing",
                    500_000,
                ),
                template(
                    "Sung Sot Cave visit",
                    "Discover the famous Surprise Cave",
                    "Bo Hon Island",
                    "Sightseeing",
                    200_000,
                ),
                template(
                    "Kayaking on the bay",
                    "Paddle a kayak through the sea caves",
                    "Ha Long Bay",
                    "Sport",
                    300_000,
                ),
            ],
        },
        DestinationSeed {
            destination: "Sapa".to_owned(),
            activities: vec![
                template(
                    "Rice terrace trekking",
                    "Hike through the terraced fields",
                    "Muong Hoa Valley",
                    "Trekking",
                    400_000,
                ),
                template(
                    "Cat Cat village visit",
                    "Learn about ethnic minority culture",
                    "Cat Cat Village",
                    "Culture",
                    250_000,
                ),
                template(
                    "Fansipan summit",
                    "Climb the highest peak in Vietnam",
                    "Fansipan",
                    "Sport",
                    600_000,
                ),
            ],
        },
    ]
}

/// Build the style-keyed accommodation tiers.
pub fn accommodation_tiers() -> Vec<SeedAccommodationTier> {
    vec![
        SeedAccommodationTier {
            style: "budget".to_owned(),
            name: "2-star hotel".to_owned(),
            kind: "Hotel".to_owned(),
            price: 500_000,
            rating: 3.5,
        },
        SeedAccommodationTier {
            style: "comfort".to_owned(),
            name: "3-star hotel".to_owned(),
            kind: "Hotel".to_owned(),
            price: 1_000_000,
            rating: 4.2,
        },
        SeedAccommodationTier {
            style: "luxury".to_owned(),
            name: "5-star resort".to_owned(),
            kind: "Resort".to_owned(),
            price: 2_500_000,
            rating: 4.8,
        },
    ]
}
