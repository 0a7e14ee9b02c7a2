//! Seed definitions for bookable tour services.

use serde::{Deserialize, Serialize};

/// Contact details for a tour provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedProvider {
    /// Stable provider identifier (UUID string).
    pub id: String,
    /// Display name of the providing company.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

/// A bookable date window with a remaining slot count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedAvailability {
    /// Inclusive window start, ISO 8601 date.
    pub start_date: String,
    /// Inclusive window end, ISO 8601 date.
    pub end_date: String,
    /// Seats remaining in this window.
    pub available_slots: u32,
}

/// A bookable tour offering with provider, pricing, and availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedTour {
    /// Stable tour identifier (UUID string).
    pub id: String,
    /// Display title of the tour.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// The provider offering this tour.
    pub provider: SeedProvider,
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
    pub availability: Vec<SeedAvailability>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

/// Build the seed catalogue of bookable tours.
///
/// Identifiers are fixed so bookings created against the seed catalogue are
/// reproducible across restarts.
pub fn seed_tours() -> Vec<SeedTour> {
    vec![
        SeedTour {
            id: "7b6c1d2e-9f10-4a31-8c52-1d63e74f85a6".to_owned(),
            name: "Ha Long Bay Cruise, 3 days 2 nights".to_owned(),
            description: "Explore Ha Long Bay aboard a luxury cruise, visit the \
                          limestone caves, and take in the scenery."
                .to_owned(),
            provider: SeedProvider {
                id: "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d".to_owned(),
                name: "ABC Travel Company".to_owned(),
                email: "abc@travel.com".to_owned(),
                phone: "0123456789".to_owned(),
            },
            price: 2_500_000,
            duration: "3 days 2 nights".to_owned(),
            location: "Ha Long, Quang Ninh".to_owned(),
            max_people: 20,
            amenities: strings(&["Cruise", "Meals", "Tour guide", "Entrance tickets"]),
            cancellation_policy: "Free cancellation up to 7 days before departure".to_owned(),
            rating: 4.8,
            review_count: 156,
            availability: vec![
                SeedAvailability {
                    start_date: "2024-02-01".to_owned(),
                    end_date: "2024-02-03".to_owned(),
                    available_slots: 5,
                },
                SeedAvailability {
                    start_date: "2024-02-15".to_owned(),
                    end_date: "2024-02-17".to_owned(),
                    available_slots: 8,
                },
            ],
        },
        SeedTour {
            id: "3e4f5a6b-7c8d-4e9f-8a1b-2c3d4e5f6a7b".to_owned(),
            name: "Sapa Discovery, 4 days 3 nights".to_owned(),
            description: "Trek the rice terraces, visit ethnic minority villages, \
                          and summit Fansipan."
                .to_owned(),
            provider: SeedProvider {
                id: "5f6a7b8c-9d0e-4f1a-8b2c-3d4e5f6a7b8c".to_owned(),
                name: "VietTravel Tours".to_owned(),
                email: "info@viettravel.com".to_owned(),
                phone: "0987654321".to_owned(),
            },
            price: 3_200_000,
            duration: "4 days 3 nights".to_owned(),
            location: "Sapa, Lao Cai".to_owned(),
            max_people: 15,
            amenities: strings(&["Hotel", "Meals", "Transfers", "Tour guide"]),
            cancellation_policy: "Free cancellation up to 5 days before departure".to_owned(),
            rating: 4.6,
            review_count: 89,
            availability: vec![
                SeedAvailability {
                    start_date: "2024-02-10".to_owned(),
                    end_date: "2024-02-13".to_owned(),
                    available_slots: 3,
                },
                SeedAvailability {
                    start_date: "2024-02-20".to_owned(),
                    end_date: "2024-02-23".to_owned(),
                    available_slots: 6,
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn seed_tours_have_unique_ids() {
        let tours = seed_tours();
        let mut ids: Vec<_> = tours.iter().map(|tour| tour.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), tours.len());
    }

    #[rstest]
    fn seed_tours_carry_positive_prices_and_capacity() {
        for tour in seed_tours() {
            assert!(tour.price > 0, "{} must have a positive price", tour.name);
            assert!(tour.max_people > 0);
            assert!(!tour.availability.is_empty());
        }
    }

    #[rstest]
    fn seed_tours_serde_roundtrip() {
        let tours = seed_tours();
        let json = serde_json::to_string(&tours).expect("serialise");
        let parsed: Vec<SeedTour> = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(parsed, tours);
    }
}
