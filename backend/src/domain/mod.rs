//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed domain entities for itineraries, tours,
//! bookings, payments and notifications, plus the services that implement
//! the use-case ports over them. Keep types immutable where practical and
//! document invariants and serialisation contracts (serde) in each type's
//! Rustdoc.
//!
//! Layout:
//! - Value and entity modules (`booking`, `catalogue`, `itinerary`, ...)
//!   hold the data model and its guarded mutations.
//! - `ports` holds the driven and driving traits that bound the hexagon.
//! - `*_service` modules hold the driving-port implementations.

pub mod booking;
pub mod booking_service;
pub mod catalogue;
pub mod error;
pub mod itinerary;
pub mod itinerary_service;
pub mod money;
pub mod notification;
pub mod notification_service;
pub mod payment;
pub mod payment_service;
pub mod ports;
pub mod preferences;
pub mod user;

pub use self::booking::{
    Booking, BookingNumber, BookingStatus, EmergencyContact, IllegalTransitionError,
    ParseBookingStatusError, PaymentState,
};
pub use self::booking_service::BookingService;
pub use self::catalogue::{AvailabilityWindow, Provider, TourService};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::itinerary::{Accommodation, Activity, ActivityTemplate, Itinerary, ItineraryDay};
pub use self::itinerary_service::ItineraryService;
pub use self::notification::{
    Notification, NotificationMetadata, NotificationPreferences, NotificationStatus,
    NotificationType,
};
pub use self::notification_service::NotificationService;
pub use self::payment::{
    FeeSchedule, GatewayResponse, ParsePaymentMethodError, Payment, PaymentMethod, PaymentStatus,
};
pub use self::payment_service::PaymentService;
pub use self::preferences::{
    ParseTravelStyleError, PreferencesValidationError, StyleMultipliers, TravelPreferences,
    TravelStyle,
};
pub use self::user::{UserId, UserIdError};
