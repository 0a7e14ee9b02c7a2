//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: every inbound HTTP endpoint, the error schema wrappers,
//! and the session cookie security scheme. The generated document backs the
//! Swagger UI served at `/docs` in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/auth/sign-in.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Travel booking backend API",
        description = "HTTP interface for itinerary synthesis, tour bookings, \
            payments and notifications."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::sign_in,
        crate::inbound::http::auth::sign_out,
        crate::inbound::http::tours::list_tours,
        crate::inbound::http::tours::get_tour,
        crate::inbound::http::itineraries::generate_itinerary,
        crate::inbound::http::itineraries::list_itineraries,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::list_bookings,
        crate::inbound::http::bookings::get_booking,
        crate::inbound::http::bookings::update_booking_status,
        crate::inbound::http::bookings::cancel_booking,
        crate::inbound::http::payments::process_payment,
        crate::inbound::http::payments::list_payments,
        crate::inbound::http::payments::refund_payment,
        crate::inbound::http::notifications::list_notifications,
        crate::inbound::http::notifications::mark_notification_read,
        crate::inbound::http::notifications::mark_all_notifications_read,
        crate::inbound::http::notifications::get_notification_preferences,
        crate::inbound::http::notifications::update_notification_preferences,
        crate::inbound::http::health::healthz,
    ),
    components(schemas(ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "auth", description = "Session sign-in and sign-out"),
        (name = "tours", description = "Tour catalogue reads"),
        (name = "itineraries", description = "Itinerary synthesis"),
        (name = "bookings", description = "Booking lifecycle"),
        (name = "payments", description = "Payment processing"),
        (name = "notifications", description = "Notification inbox and preferences"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
