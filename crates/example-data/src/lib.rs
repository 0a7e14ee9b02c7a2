//! Seed data for the in-memory tour catalogue.
//!
//! This crate provides the bookable tour services, per-destination activity
//! templates, and style-keyed accommodation tiers that back the mock
//! catalogue. It is designed to be independent of backend domain types to
//! avoid circular dependencies: everything here is plain strings and numbers,
//! and the backend converts seeds into validated domain aggregates at
//! startup.
//!
//! # Example
//!
//! ```
//! let tours = example_data::seed_tours();
//! assert!(!tours.is_empty());
//!
//! let templates = example_data::destination_templates();
//! assert!(
//!     templates
//!         .iter()
//!         .any(|seed| seed.destination == example_data::DEFAULT_DESTINATION)
//! );
//! ```

mod templates;
mod tours;

pub use templates::{
    DEFAULT_DESTINATION, DestinationSeed, SeedAccommodationTier, SeedActivityTemplate,
    accommodation_tiers, destination_templates,
};
pub use tours::{SeedAvailability, SeedProvider, SeedTour, seed_tours};
