//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports describe how the domain expects to interact with adapters
//! (stores, the tour catalogue, entropy). Driving ports are the use-case
//! traits implemented by domain services and consumed by inbound adapters.
//! Each driven port exposes a strongly typed error enum so adapters map
//! their failures into predictable variants instead of returning
//! `anyhow::Result`.

mod activity_catalogue;
mod booking_command;
mod booking_query;
mod booking_repository;
mod entropy;
mod itinerary_planner;
mod itinerary_repository;
mod notification_command;
mod notification_repository;
mod payment_command;
mod payment_repository;
mod tour_catalogue;

pub use activity_catalogue::{ActivityCatalogue, FixtureActivityCatalogue};
pub use booking_command::{
    BookingCommand, CancelBookingRequest, CreateBookingRequest, CustomerDetails,
    UpdateBookingStatusRequest,
};
pub use booking_query::BookingQuery;
pub use booking_repository::{BookingRepository, BookingRepositoryError, FixtureBookingRepository};
pub use entropy::{Entropy, FixtureEntropy};
pub use itinerary_planner::{GenerateItineraryRequest, ItineraryPlanner};
pub use itinerary_repository::{
    FixtureItineraryRepository, ItineraryRepository, ItineraryRepositoryError,
};
pub use notification_command::{CreateNotificationRequest, NotificationCommand};
pub use notification_repository::{
    FixtureNotificationRepository, NotificationRepository, NotificationRepositoryError,
};
pub use payment_command::{PaymentCommand, ProcessPaymentRequest, RefundPaymentRequest};
pub use payment_repository::{
    FixturePaymentRepository, PaymentRepository, PaymentRepositoryError,
};
pub use tour_catalogue::{TourCatalogue, TourCatalogueError};

#[cfg(test)]
pub use activity_catalogue::MockActivityCatalogue;
#[cfg(test)]
pub use booking_command::MockBookingCommand;
#[cfg(test)]
pub use booking_query::MockBookingQuery;
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
#[cfg(test)]
pub use entropy::MockEntropy;
#[cfg(test)]
pub use itinerary_planner::MockItineraryPlanner;
#[cfg(test)]
pub use itinerary_repository::MockItineraryRepository;
#[cfg(test)]
pub use notification_command::MockNotificationCommand;
#[cfg(test)]
pub use notification_repository::MockNotificationRepository;
#[cfg(test)]
pub use payment_command::MockPaymentCommand;
#[cfg(test)]
pub use payment_repository::MockPaymentRepository;
#[cfg(test)]
pub use tour_catalogue::MockTourCatalogue;
