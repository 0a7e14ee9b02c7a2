//! Booking lifecycle endpoints.
//!
//! ```text
//! POST  /api/v1/bookings
//! GET   /api/v1/bookings
//! GET   /api/v1/bookings/{id}
//! PATCH /api/v1/bookings/{id}/status
//! POST  /api/v1/bookings/{id}/cancel
//! ```

use std::str::FromStr;

use actix_web::{get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::{
    CancelBookingRequest, CreateBookingRequest, CustomerDetails, UpdateBookingStatusRequest,
};
use crate::domain::{Booking, BookingStatus, EmergencyContact};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, invalid_choice_error, parse_date, parse_uuid,
};

/// Emergency contact payload.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContactBody {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

impl From<EmergencyContactBody> for EmergencyContact {
    fn from(body: EmergencyContactBody) -> Self {
        Self {
            name: body.name,
            phone: body.phone,
            relationship: body.relationship,
        }
    }
}

impl From<EmergencyContact> for EmergencyContactBody {
    fn from(contact: EmergencyContact) -> Self {
        Self {
            name: contact.name,
            phone: contact.phone,
            relationship: contact.relationship,
        }
    }
}

/// Request payload for creating a booking.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequestBody {
    #[schema(format = "uuid")]
    pub tour_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    /// Inclusive trip start, `YYYY-MM-DD`.
    #[schema(format = "date")]
    pub start_date: String,
    /// Inclusive trip end, `YYYY-MM-DD`.
    #[schema(format = "date")]
    pub end_date: String,
    pub number_of_people: u32,
    pub special_requests: Option<String>,
    pub emergency_contact: Option<EmergencyContactBody>,
}

/// Request payload for a booking status change.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequestBody {
    /// One of `pending`, `confirmed`, `cancelled`, `completed`.
    pub status: String,
}

/// Request payload for cancelling a booking.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingRequestBody {
    pub reason: Option<String>,
}

/// Query parameters for listing bookings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    /// When set, list the provider's bookings instead of the customer's.
    pub provider: Option<String>,
}

/// Response payload for a booking.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    /// Human-readable booking code, `VT` + six digits.
    pub booking_number: String,
    #[schema(format = "uuid")]
    pub service_id: String,
    pub service_name: String,
    #[schema(format = "uuid")]
    pub provider_id: String,
    pub provider_name: String,
    #[schema(format = "uuid")]
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[schema(format = "date")]
    pub start_date: String,
    #[schema(format = "date")]
    pub end_date: String,
    pub number_of_people: u32,
    /// Fixed total in VND: price × party size at creation.
    pub total_amount: i64,
    pub status: String,
    pub payment_state: String,
    pub special_requests: Option<String>,
    pub emergency_contact: Option<EmergencyContactBody>,
    pub cancellation_reason: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

impl From<Booking> for BookingResponseBody {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            booking_number: booking.booking_number.as_str().to_owned(),
            service_id: booking.service_id.to_string(),
            service_name: booking.service_name,
            provider_id: booking.provider_id.to_string(),
            provider_name: booking.provider_name,
            customer_id: booking.customer_id.to_string(),
            customer_name: booking.customer_name,
            customer_email: booking.customer_email,
            customer_phone: booking.customer_phone,
            start_date: booking.start_date.format("%Y-%m-%d").to_string(),
            end_date: booking.end_date.format("%Y-%m-%d").to_string(),
            number_of_people: booking.number_of_people,
            total_amount: booking.total_amount,
            status: booking.status.as_str().to_owned(),
            payment_state: booking.payment_state.as_str().to_owned(),
            special_requests: booking.special_requests,
            emergency_contact: booking.emergency_contact.map(EmergencyContactBody::from),
            cancellation_reason: booking.cancellation_reason,
            created_at: booking.created_at.to_rfc3339(),
            updated_at: booking.updated_at.to_rfc3339(),
        }
    }
}

fn parse_create_request(
    body: CreateBookingRequestBody,
    customer: CustomerDetails,
) -> ApiResult<CreateBookingRequest> {
    Ok(CreateBookingRequest {
        tour_id: parse_uuid(body.tour_id, FieldName::new("tourId"))?,
        customer,
        start_date: parse_date(body.start_date, FieldName::new("startDate"))?,
        end_date: parse_date(body.end_date, FieldName::new("endDate"))?,
        number_of_people: body.number_of_people,
        special_requests: body.special_requests,
        emergency_contact: body.emergency_contact.map(EmergencyContact::from),
    })
}

/// Reserve seats on a tour and create a pending booking.
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    request_body = CreateBookingRequestBody,
    responses(
        (status = 200, description = "Created booking", body = BookingResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Unknown tour", body = ErrorSchema),
        (status = 409, description = "Capacity exhausted", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "createBooking",
    security(("SessionCookie" = []))
)]
#[post("/bookings")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateBookingRequestBody>,
) -> ApiResult<web::Json<BookingResponseBody>> {
    let user_id = session.require_user_id()?;
    let body = payload.into_inner();
    let customer = CustomerDetails {
        id: user_id,
        name: body.customer_name.clone(),
        email: body.customer_email.clone(),
        phone: body.customer_phone.clone(),
    };
    let request = parse_create_request(body, customer)?;

    let booking = state.bookings.create(request).await?;

    Ok(web::Json(BookingResponseBody::from(booking)))
}

/// Fetch a booking by id.
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    params(("id" = Uuid, Path, description = "Booking identifier")),
    responses(
        (status = 200, description = "The booking", body = BookingResponseBody),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Unknown booking", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "getBooking",
    security(("SessionCookie" = []))
)]
#[get("/bookings/{id}")]
pub async fn get_booking(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<BookingResponseBody>> {
    session.require_user_id()?;

    let booking = state.bookings_query.get(&path.into_inner()).await?;

    Ok(web::Json(BookingResponseBody::from(booking)))
}

/// List bookings, newest first.
///
/// Defaults to the signed-in customer's bookings; with `?provider=<uuid>` it
/// lists the bookings taken against that provider's tours instead.
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    params(
        ("provider" = Option<Uuid>, Query, description = "List a provider's bookings")
    ),
    responses(
        (status = 200, description = "Bookings", body = Vec<BookingResponseBody>),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "listBookings",
    security(("SessionCookie" = []))
)]
#[get("/bookings")]
pub async fn list_bookings(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<BookingListQuery>,
) -> ApiResult<web::Json<Vec<BookingResponseBody>>> {
    let user_id = session.require_user_id()?;

    let bookings = match query.into_inner().provider {
        Some(raw) => {
            let provider_id = parse_uuid(raw, FieldName::new("provider"))?;
            state
                .bookings_query
                .list_for_provider(&provider_id)
                .await?
        }
        None => state.bookings_query.list_for_customer(&user_id).await?,
    };

    Ok(web::Json(
        bookings.into_iter().map(BookingResponseBody::from).collect(),
    ))
}

/// Move a booking along its lifecycle.
#[utoipa::path(
    patch,
    path = "/api/v1/bookings/{id}/status",
    params(("id" = Uuid, Path, description = "Booking identifier")),
    request_body = UpdateBookingStatusRequestBody,
    responses(
        (status = 200, description = "Updated booking", body = BookingResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Unknown booking", body = ErrorSchema),
        (status = 409, description = "Illegal transition", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "updateBookingStatus",
    security(("SessionCookie" = []))
)]
#[patch("/bookings/{id}/status")]
pub async fn update_booking_status(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateBookingStatusRequestBody>,
) -> ApiResult<web::Json<BookingResponseBody>> {
    session.require_user_id()?;
    let raw = payload.into_inner().status;
    let status = BookingStatus::from_str(&raw).map_err(|_| {
        invalid_choice_error(
            FieldName::new("status"),
            &raw,
            "pending|confirmed|cancelled|completed",
        )
    })?;

    let booking = state
        .bookings
        .update_status(UpdateBookingStatusRequest {
            booking_id: path.into_inner(),
            status,
        })
        .await?;

    Ok(web::Json(BookingResponseBody::from(booking)))
}

/// Cancel a booking, recording the reason and releasing its seats.
#[utoipa::path(
    post,
    path = "/api/v1/bookings/{id}/cancel",
    params(("id" = Uuid, Path, description = "Booking identifier")),
    request_body = CancelBookingRequestBody,
    responses(
        (status = 200, description = "Cancelled booking", body = BookingResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Unknown booking", body = ErrorSchema),
        (status = 409, description = "Illegal transition", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "cancelBooking",
    security(("SessionCookie" = []))
)]
#[post("/bookings/{id}/cancel")]
pub async fn cancel_booking(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    payload: web::Json<CancelBookingRequestBody>,
) -> ApiResult<web::Json<BookingResponseBody>> {
    session.require_user_id()?;

    let booking = state
        .bookings
        .cancel(CancelBookingRequest {
            booking_id: path.into_inner(),
            reason: payload.into_inner().reason,
        })
        .await?;

    Ok(web::Json(BookingResponseBody::from(booking)))
}

#[cfg(test)]
#[path = "bookings_tests.rs"]
mod tests;
