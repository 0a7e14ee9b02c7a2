//! Server construction and middleware wiring.

mod config;

pub use config::{AppConfig, AppConfigError, app_config_from_env};

use std::sync::Arc;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::{Clock, DefaultClock};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::Entropy;
use crate::domain::{BookingService, ItineraryService, NotificationService, PaymentService};
use crate::inbound::http::auth::{sign_in, sign_out};
use crate::inbound::http::bookings::{
    cancel_booking, create_booking, get_booking, list_bookings, update_booking_status,
};
use crate::inbound::http::health::healthz;
use crate::inbound::http::itineraries::{generate_itinerary, list_itineraries};
use crate::inbound::http::notifications::{
    get_notification_preferences, list_notifications, mark_all_notifications_read,
    mark_notification_read, update_notification_preferences,
};
use crate::inbound::http::payments::{list_payments, process_payment, refund_payment};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::tours::{get_tour, list_tours};
use crate::outbound::ThreadEntropy;
use crate::outbound::memory::{
    InMemoryBookingRepository, InMemoryItineraryRepository, InMemoryNotificationRepository,
    InMemoryPaymentRepository, InMemoryTourCatalogue, SeededActivityCatalogue,
};

/// Wire the seeded in-memory adapters into the domain services.
fn build_http_state(config: &AppConfig) -> std::io::Result<web::Data<HttpState>> {
    let tours = Arc::new(InMemoryTourCatalogue::seeded().map_err(std::io::Error::other)?);
    let activities = Arc::new(SeededActivityCatalogue::seeded());
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let entropy: Arc<dyn Entropy> = Arc::new(ThreadEntropy);

    let booking_repo = Arc::new(InMemoryBookingRepository::new());
    let itinerary_repo = Arc::new(InMemoryItineraryRepository::new());
    let payment_repo = Arc::new(InMemoryPaymentRepository::new());
    let notification_repo = Arc::new(InMemoryNotificationRepository::new());

    let planner = Arc::new(ItineraryService::new(
        itinerary_repo,
        activities,
        clock.clone(),
        entropy.clone(),
        config.pricing,
    ));
    let bookings = Arc::new(BookingService::new(
        booking_repo.clone(),
        tours.clone(),
        clock.clone(),
    ));
    let payments = Arc::new(PaymentService::new(
        payment_repo,
        booking_repo,
        clock.clone(),
        entropy,
        config.fees,
        config.success_rate_percent,
    ));
    let notifications = Arc::new(NotificationService::new(notification_repo, clock));

    Ok(web::Data::new(HttpState::new(HttpStatePorts {
        planner,
        bookings: bookings.clone(),
        bookings_query: bookings,
        payments,
        notifications,
        tours,
    })))
}

#[derive(Clone)]
struct AppDependencies {
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(sign_in)
        .service(sign_out)
        .service(list_tours)
        .service(get_tour)
        .service(generate_itinerary)
        .service(list_itineraries)
        .service(create_booking)
        .service(list_bookings)
        .service(get_booking)
        .service(update_booking_status)
        .service(cancel_booking)
        .service(process_payment)
        .service(list_payments)
        .service(refund_payment)
        .service(list_notifications)
        .service(mark_all_notifications_read)
        .service(mark_notification_read)
        .service(get_notification_preferences)
        .service(update_notification_preferences);

    let app = App::new().app_data(http_state).service(api).service(healthz);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server from the application configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when seeding the catalogue or binding the
/// socket fails.
pub fn create_server(config: AppConfig) -> std::io::Result<Server> {
    let http_state = build_http_state(&config)?;
    let AppConfig {
        bind_addr, session, ..
    } = config;
    let key = session.key;
    let cookie_secure = session.cookie_secure;
    let same_site = session.same_site;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}
