//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BookingCommand, BookingQuery, ItineraryPlanner, NotificationCommand, PaymentCommand,
    TourCatalogue,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub planner: Arc<dyn ItineraryPlanner>,
    pub bookings: Arc<dyn BookingCommand>,
    pub bookings_query: Arc<dyn BookingQuery>,
    pub payments: Arc<dyn PaymentCommand>,
    pub notifications: Arc<dyn NotificationCommand>,
    pub tours: Arc<dyn TourCatalogue>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub planner: Arc<dyn ItineraryPlanner>,
    pub bookings: Arc<dyn BookingCommand>,
    pub bookings_query: Arc<dyn BookingQuery>,
    pub payments: Arc<dyn PaymentCommand>,
    pub notifications: Arc<dyn NotificationCommand>,
    pub tours: Arc<dyn TourCatalogue>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            planner,
            bookings,
            bookings_query,
            payments,
            notifications,
            tours,
        } = ports;
        Self {
            planner,
            bookings,
            bookings_query,
            payments,
            notifications,
            tours,
        }
    }
}
