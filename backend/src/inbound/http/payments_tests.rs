//! Tests for payment HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

use super::*;
use crate::domain::{Error, GatewayResponse, PaymentStatus};
use crate::inbound::http::test_utils::{MockPorts, sign_in_cookie, test_app};

fn completed_payment(request: &ProcessPaymentRequest) -> Payment {
    let created = Utc
        .with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
        .single()
        .expect("valid ts");
    Payment {
        id: Uuid::new_v4(),
        booking_id: request.booking_id,
        amount: request.amount,
        currency: request.currency.clone(),
        method: request.method,
        processing_fee: 125_000,
        status: PaymentStatus::Completed,
        transaction_id: Some("TXN1705311000000".to_owned()),
        gateway_response: Some(GatewayResponse {
            code: "00".to_owned(),
            message: "Transaction successful".to_owned(),
            auth_code: Some("AUTH123456".to_owned()),
        }),
        failure_reason: None,
        refund_reason: None,
        created_at: created,
        updated_at: created,
        completed_at: Some(created),
    }
}

fn process_payload(booking_id: Uuid) -> Value {
    json!({
        "bookingId": booking_id.to_string(),
        "amount": 5_000_000,
        "currency": "VND",
        "method": "credit_card"
    })
}

#[actix_web::test]
async fn process_returns_the_completed_payment() {
    let booking_id = Uuid::new_v4();
    let mut ports = MockPorts::default();
    ports
        .payments
        .expect_process()
        .withf(move |request| {
            request.booking_id == booking_id && request.method == PaymentMethod::CreditCard
        })
        .returning(|request| Ok(completed_payment(&request)));

    let app = actix_test::init_service(test_app(ports.into_state(), |config| {
        config.service(process_payment);
    }))
    .await;
    let cookie = sign_in_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/payments")
            .cookie(cookie)
            .set_json(process_payload(booking_id))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["status"], "completed");
    assert_eq!(body["processingFee"], 125_000);
    assert_eq!(body["gatewayResponse"]["code"], "00");
}

#[actix_web::test]
async fn declined_charge_is_still_a_successful_response() {
    let mut ports = MockPorts::default();
    ports.payments.expect_process().returning(|request| {
        let mut payment = completed_payment(&request);
        payment.status = PaymentStatus::Failed;
        payment.transaction_id = None;
        payment.completed_at = None;
        payment.failure_reason = Some("Transaction declined".to_owned());
        payment.gateway_response = Some(GatewayResponse {
            code: "05".to_owned(),
            message: "Transaction declined".to_owned(),
            auth_code: None,
        });
        Ok(payment)
    });

    let app = actix_test::init_service(test_app(ports.into_state(), |config| {
        config.service(process_payment);
    }))
    .await;
    let cookie = sign_in_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/payments")
            .cookie(cookie)
            .set_json(process_payload(Uuid::new_v4()))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["status"], "failed");
    assert_eq!(body["failureReason"], "Transaction declined");
}

#[actix_web::test]
async fn process_rejects_an_unknown_method() {
    let app = actix_test::init_service(test_app(
        MockPorts::default().into_state(),
        |config| {
            config.service(process_payment);
        },
    ))
    .await;
    let cookie = sign_in_cookie(&app).await;

    let mut payload = process_payload(Uuid::new_v4());
    payload["method"] = Value::String("crypto".to_owned());

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/payments")
            .cookie(cookie)
            .set_json(payload)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"]["field"], "method");
}

#[actix_web::test]
async fn listing_requires_a_booking_filter() {
    let app = actix_test::init_service(test_app(
        MockPorts::default().into_state(),
        |config| {
            config.service(list_payments);
        },
    ))
    .await;
    let cookie = sign_in_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/payments")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"]["field"], "bookingId");
}

#[actix_web::test]
async fn listing_returns_the_booking_history() {
    let booking_id = Uuid::new_v4();
    let mut ports = MockPorts::default();
    ports
        .payments
        .expect_list_for_booking()
        .withf(move |id| *id == booking_id)
        .returning(|booking_id| {
            let request = ProcessPaymentRequest {
                booking_id: *booking_id,
                amount: 5_000_000,
                currency: "VND".to_owned(),
                method: PaymentMethod::CreditCard,
            };
            Ok(vec![completed_payment(&request)])
        });

    let app = actix_test::init_service(test_app(ports.into_state(), |config| {
        config.service(list_payments);
    }))
    .await;
    let cookie = sign_in_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/payments?bookingId={booking_id}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["bookingId"], booking_id.to_string());
}

#[actix_web::test]
async fn refund_of_a_failed_payment_maps_to_conflict() {
    let mut ports = MockPorts::default();
    ports
        .payments
        .expect_refund()
        .returning(|_| Err(Error::conflict("only completed payments can be refunded")));

    let app = actix_test::init_service(test_app(ports.into_state(), |config| {
        config.service(refund_payment);
    }))
    .await;
    let cookie = sign_in_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/payments/{}/refund", Uuid::new_v4()))
            .cookie(cookie)
            .set_json(json!({"reason": "change of plans"}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn refund_returns_the_refunded_payment() {
    let payment_id = Uuid::new_v4();
    let mut ports = MockPorts::default();
    ports
        .payments
        .expect_refund()
        .withf(move |request| {
            request.payment_id == payment_id
                && request.reason.as_deref() == Some("change of plans")
        })
        .returning(|request| {
            let create = ProcessPaymentRequest {
                booking_id: Uuid::new_v4(),
                amount: 5_000_000,
                currency: "VND".to_owned(),
                method: PaymentMethod::CreditCard,
            };
            let mut payment = completed_payment(&create);
            payment.id = request.payment_id;
            payment.status = PaymentStatus::Refunded;
            payment.refund_reason = request.reason;
            Ok(payment)
        });

    let app = actix_test::init_service(test_app(ports.into_state(), |config| {
        config.service(refund_payment);
    }))
    .await;
    let cookie = sign_in_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/payments/{payment_id}/refund"))
            .cookie(cookie)
            .set_json(json!({"reason": "change of plans"}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["status"], "refunded");
    assert_eq!(body["refundReason"], "change of plans");
    assert!(body["failureReason"].is_null());
}

#[actix_web::test]
async fn payment_endpoints_require_a_session() {
    let app = actix_test::init_service(test_app(
        MockPorts::default().into_state(),
        |config| {
            config.service(process_payment);
        },
    ))
    .await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/payments")
            .set_json(process_payload(Uuid::new_v4()))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
