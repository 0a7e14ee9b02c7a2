//! Payment processing endpoints.
//!
//! ```text
//! POST /api/v1/payments
//! GET  /api/v1/payments?bookingId={uuid}
//! POST /api/v1/payments/{id}/refund
//! ```

use std::str::FromStr;

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::{ProcessPaymentRequest, RefundPaymentRequest};
use crate::domain::{Payment, PaymentMethod};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::tours::to_json_value;
use crate::inbound::http::validation::{
    FieldName, invalid_choice_error, missing_field_error, parse_uuid,
};

/// Request payload for charging a booking.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentRequestBody {
    #[schema(format = "uuid")]
    pub booking_id: String,
    /// Charged amount in minor units of `currency`.
    pub amount: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// One of `credit_card`, `bank_transfer`, `e_wallet`, `cash`.
    pub method: String,
}

/// Request payload for refunding a payment.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefundPaymentRequestBody {
    pub reason: Option<String>,
}

/// Query parameters for listing payments.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentListQuery {
    pub booking_id: Option<String>,
}

/// Response payload for a charge attempt.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(format = "uuid")]
    pub booking_id: String,
    pub amount: i64,
    pub currency: String,
    pub method: String,
    /// Processing fee applied on top of `amount`.
    pub processing_fee: i64,
    pub status: String,
    pub transaction_id: Option<String>,
    /// Raw gateway response: code, message, optional authCode.
    #[schema(value_type = Option<Object>)]
    pub gateway_response: Option<serde_json::Value>,
    pub failure_reason: Option<String>,
    pub refund_reason: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
    #[schema(format = "date-time")]
    pub completed_at: Option<String>,
}

impl TryFrom<Payment> for PaymentResponseBody {
    type Error = crate::domain::Error;

    fn try_from(payment: Payment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: payment.id.to_string(),
            booking_id: payment.booking_id.to_string(),
            amount: payment.amount,
            currency: payment.currency,
            method: payment.method.as_str().to_owned(),
            processing_fee: payment.processing_fee,
            status: payment.status.as_str().to_owned(),
            transaction_id: payment.transaction_id,
            gateway_response: payment
                .gateway_response
                .map(to_json_value)
                .transpose()?,
            failure_reason: payment.failure_reason,
            refund_reason: payment.refund_reason,
            created_at: payment.created_at.to_rfc3339(),
            updated_at: payment.updated_at.to_rfc3339(),
            completed_at: payment.completed_at.map(|at| at.to_rfc3339()),
        })
    }
}

fn parse_process_request(body: ProcessPaymentRequestBody) -> ApiResult<ProcessPaymentRequest> {
    let method = PaymentMethod::from_str(&body.method).map_err(|_| {
        invalid_choice_error(
            FieldName::new("method"),
            &body.method,
            "credit_card|bank_transfer|e_wallet|cash",
        )
    })?;
    Ok(ProcessPaymentRequest {
        booking_id: parse_uuid(body.booking_id, FieldName::new("bookingId"))?,
        amount: body.amount,
        currency: body.currency,
        method,
    })
}

/// Charge a booking through the mock gateway.
///
/// A declined charge still returns 200: the payment comes back with a
/// `failed` status and a failure reason rather than an error envelope.
#[utoipa::path(
    post,
    path = "/api/v1/payments",
    request_body = ProcessPaymentRequestBody,
    responses(
        (status = 200, description = "Charge attempt outcome", body = PaymentResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Unknown booking", body = ErrorSchema),
        (status = 409, description = "Booking not payable", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "processPayment",
    security(("SessionCookie" = []))
)]
#[post("/payments")]
pub async fn process_payment(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ProcessPaymentRequestBody>,
) -> ApiResult<web::Json<PaymentResponseBody>> {
    session.require_user_id()?;
    let request = parse_process_request(payload.into_inner())?;

    let payment = state.payments.process(request).await?;

    Ok(web::Json(PaymentResponseBody::try_from(payment)?))
}

/// List every charge attempt against a booking, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/payments",
    params(
        ("bookingId" = Uuid, Query, description = "Booking to list payments for")
    ),
    responses(
        (status = 200, description = "Charge attempts", body = Vec<PaymentResponseBody>),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "listPayments",
    security(("SessionCookie" = []))
)]
#[get("/payments")]
pub async fn list_payments(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<PaymentListQuery>,
) -> ApiResult<web::Json<Vec<PaymentResponseBody>>> {
    session.require_user_id()?;
    let raw = query
        .into_inner()
        .booking_id
        .ok_or_else(|| missing_field_error(FieldName::new("bookingId")))?;
    let booking_id = parse_uuid(raw, FieldName::new("bookingId"))?;

    let payments = state.payments.list_for_booking(&booking_id).await?;
    let body = payments
        .into_iter()
        .map(PaymentResponseBody::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(web::Json(body))
}

/// Refund a completed payment.
#[utoipa::path(
    post,
    path = "/api/v1/payments/{id}/refund",
    params(("id" = Uuid, Path, description = "Payment identifier")),
    request_body = RefundPaymentRequestBody,
    responses(
        (status = 200, description = "Refunded payment", body = PaymentResponseBody),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Unknown payment", body = ErrorSchema),
        (status = 409, description = "Payment not refundable", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "refundPayment",
    security(("SessionCookie" = []))
)]
#[post("/payments/{id}/refund")]
pub async fn refund_payment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    payload: web::Json<RefundPaymentRequestBody>,
) -> ApiResult<web::Json<PaymentResponseBody>> {
    session.require_user_id()?;

    let payment = state
        .payments
        .refund(RefundPaymentRequest {
            payment_id: path.into_inner(),
            reason: payload.into_inner().reason,
        })
        .await?;

    Ok(web::Json(PaymentResponseBody::try_from(payment)?))
}

#[cfg(test)]
#[path = "payments_tests.rs"]
mod tests;
