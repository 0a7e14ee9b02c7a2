//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};

use crate::domain::UserId;
use crate::domain::ports::{
    MockBookingCommand, MockBookingQuery, MockItineraryPlanner, MockNotificationCommand,
    MockPaymentCommand, MockTourCatalogue,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Mock port bundle for handler tests.
///
/// Every port starts without expectations; a handler touching a port its
/// test did not configure panics, which is exactly what we want.
#[derive(Default)]
pub struct MockPorts {
    pub planner: MockItineraryPlanner,
    pub bookings: MockBookingCommand,
    pub bookings_query: MockBookingQuery,
    pub payments: MockPaymentCommand,
    pub notifications: MockNotificationCommand,
    pub tours: MockTourCatalogue,
}

impl MockPorts {
    /// Wrap the configured mocks into handler state.
    pub fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            planner: Arc::new(self.planner),
            bookings: Arc::new(self.bookings),
            bookings_query: Arc::new(self.bookings_query),
            payments: Arc::new(self.payments),
            notifications: Arc::new(self.notifications),
            tours: Arc::new(self.tours),
        })
    }
}

/// Fixture user id used across handler tests.
pub fn fixture_user_id() -> UserId {
    UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("fixture id")
}

/// Sign the fixture user in and return the resulting session cookie.
pub async fn sign_in_cookie(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
) -> actix_web::cookie::Cookie<'static> {
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/auth/sign-in")
        .set_json(serde_json::json!({ "userId": fixture_user_id().to_string() }))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

/// Standard test application wiring: state, session middleware, and the
/// sign-in route so tests can authenticate.
pub fn test_app(
    state: HttpState,
    configure: impl FnOnce(&mut web::ServiceConfig),
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    actix_web::App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .service(
            web::scope("/api/v1")
                .service(crate::inbound::http::auth::sign_in)
                .configure(configure),
        )
}
