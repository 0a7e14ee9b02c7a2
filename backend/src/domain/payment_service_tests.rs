//! Tests for the payment processing service.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use uuid::Uuid;

use super::*;
use crate::domain::ports::{MockBookingRepository, MockEntropy, MockPaymentRepository};
use crate::domain::{
    BookingNumber, BookingStatus, ErrorCode, PaymentMethod, UserId,
};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

fn sample_booking(booking_id: Uuid) -> Booking {
    let created = fixture_timestamp() - chrono::Duration::days(2);
    Booking {
        id: booking_id,
        booking_number: BookingNumber::from_timestamp(&created),
        service_id: Uuid::new_v4(),
        service_name: "Ha Long Bay Cruise".to_owned(),
        provider_id: Uuid::new_v4(),
        provider_name: "ABC Travel Company".to_owned(),
        customer_id: UserId::random(),
        customer_name: "Nguyen Van A".to_owned(),
        customer_email: "nguyenvana@email.com".to_owned(),
        customer_phone: "0123456789".to_owned(),
        start_date: NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date"),
        end_date: NaiveDate::from_ymd_opt(2024, 2, 3).expect("valid date"),
        number_of_people: 2,
        total_amount: 5_000_000,
        status: BookingStatus::Confirmed,
        payment_state: PaymentState::Pending,
        special_requests: None,
        emergency_contact: None,
        cancellation_reason: None,
        created_at: created,
        updated_at: created,
    }
}

fn sample_payment(booking_id: Uuid, status: PaymentStatus) -> Payment {
    let created = fixture_timestamp() - chrono::Duration::hours(1);
    Payment {
        id: Uuid::new_v4(),
        booking_id,
        amount: 5_000_000,
        currency: "VND".to_owned(),
        method: PaymentMethod::CreditCard,
        processing_fee: 125_000,
        status,
        transaction_id: Some("TXN1705741200000".to_owned()),
        gateway_response: None,
        failure_reason: None,
        refund_reason: None,
        created_at: created,
        updated_at: created,
        completed_at: (status == PaymentStatus::Completed).then_some(created),
    }
}

fn sample_request(booking_id: Uuid) -> ProcessPaymentRequest {
    ProcessPaymentRequest {
        booking_id,
        amount: 5_000_000,
        currency: "VND".to_owned(),
        method: PaymentMethod::CreditCard,
    }
}

fn mock_entropy(unit: f64) -> MockEntropy {
    let mut entropy = MockEntropy::new();
    entropy.expect_unit().return_const(unit);
    entropy
        .expect_token()
        .returning(|length| "A".repeat(length));
    entropy
}

fn booking_repo_returning(booking: Booking) -> MockBookingRepository {
    let mut repo = MockBookingRepository::new();
    repo.expect_find_by_id()
        .returning(move |_| Ok(Some(booking.clone())));
    repo
}

fn service(
    payment_repo: MockPaymentRepository,
    booking_repo: MockBookingRepository,
    entropy: MockEntropy,
) -> PaymentService<MockPaymentRepository, MockBookingRepository> {
    PaymentService::new(
        Arc::new(payment_repo),
        Arc::new(booking_repo),
        fixture_clock(),
        Arc::new(entropy),
        FeeSchedule::default(),
        90,
    )
}

#[tokio::test]
async fn process_completes_charge_when_draw_is_under_rate() {
    let booking_id = Uuid::new_v4();
    let mut booking_repo = booking_repo_returning(sample_booking(booking_id));
    booking_repo
        .expect_update()
        .times(1)
        .withf(|booking| booking.payment_state == PaymentState::Paid)
        .return_once(|_| Ok(()));

    let mut payment_repo = MockPaymentRepository::new();
    payment_repo
        .expect_find_completed_for_booking()
        .times(1)
        .return_once(|_| Ok(None));
    payment_repo
        .expect_insert_unless_completed()
        .times(1)
        .return_once(|_| Ok(None));

    let payment = service(payment_repo, booking_repo, mock_entropy(0.2))
        .process(sample_request(booking_id))
        .await
        .expect("charge accepted");

    assert_eq!(payment.status, PaymentStatus::Completed);
    assert_eq!(payment.processing_fee, 125_000);
    assert_eq!(payment.completed_at, Some(fixture_timestamp()));
    let gateway = payment.gateway_response.expect("gateway response recorded");
    assert_eq!(gateway.code, "00");
    assert_eq!(gateway.auth_code.as_deref(), Some("AUTHAAAAAA"));
    assert!(
        payment
            .transaction_id
            .expect("transaction id assigned")
            .starts_with("TXN")
    );
}

#[tokio::test]
async fn process_records_decline_as_failed_payment_not_error() {
    let booking_id = Uuid::new_v4();
    let mut booking_repo = booking_repo_returning(sample_booking(booking_id));
    // A declined charge leaves the booking's payment state untouched.
    booking_repo.expect_update().times(0);

    let mut payment_repo = MockPaymentRepository::new();
    payment_repo
        .expect_find_completed_for_booking()
        .times(1)
        .return_once(|_| Ok(None));
    payment_repo
        .expect_insert_unless_completed()
        .times(1)
        .return_once(|_| Ok(None));

    let payment = service(payment_repo, booking_repo, mock_entropy(0.95))
        .process(sample_request(booking_id))
        .await
        .expect("decline is not an error");

    assert_eq!(payment.status, PaymentStatus::Failed);
    assert_eq!(
        payment.failure_reason.as_deref(),
        Some("Insufficient funds or card declined")
    );
    let gateway = payment.gateway_response.expect("gateway response recorded");
    assert_eq!(gateway.code, "05");
    assert!(gateway.auth_code.is_none());
}

#[tokio::test]
async fn process_returns_existing_completed_payment_without_recharging() {
    let booking_id = Uuid::new_v4();
    let existing = sample_payment(booking_id, PaymentStatus::Completed);
    let existing_id = existing.id;

    let booking_repo = booking_repo_returning(sample_booking(booking_id));

    let mut payment_repo = MockPaymentRepository::new();
    payment_repo
        .expect_find_completed_for_booking()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    payment_repo.expect_insert_unless_completed().times(0);

    let payment = service(payment_repo, booking_repo, MockEntropy::new())
        .process(sample_request(booking_id))
        .await
        .expect("idempotent repeat");

    assert_eq!(payment.id, existing_id);
    assert_eq!(payment.status, PaymentStatus::Completed);
}

#[tokio::test]
async fn process_yields_to_a_concurrent_charge_that_settled_first() {
    let booking_id = Uuid::new_v4();
    let existing = sample_payment(booking_id, PaymentStatus::Completed);
    let existing_id = existing.id;

    let mut booking_repo = booking_repo_returning(sample_booking(booking_id));
    // The winning charge already moved the booking to paid.
    booking_repo.expect_update().times(0);

    let mut payment_repo = MockPaymentRepository::new();
    payment_repo
        .expect_find_completed_for_booking()
        .times(1)
        .return_once(|_| Ok(None));
    payment_repo
        .expect_insert_unless_completed()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));

    let payment = service(payment_repo, booking_repo, mock_entropy(0.2))
        .process(sample_request(booking_id))
        .await
        .expect("existing charge returned");

    assert_eq!(payment.id, existing_id);
    assert_eq!(payment.status, PaymentStatus::Completed);
}

#[tokio::test]
async fn process_rejects_unknown_booking() {
    let mut booking_repo = MockBookingRepository::new();
    booking_repo
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));

    let mut payment_repo = MockPaymentRepository::new();
    payment_repo.expect_insert_unless_completed().times(0);

    let error = service(payment_repo, booking_repo, MockEntropy::new())
        .process(sample_request(Uuid::new_v4()))
        .await
        .expect_err("unknown booking");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn process_rejects_non_positive_amount() {
    let mut request = sample_request(Uuid::new_v4());
    request.amount = 0;

    let error = service(
        MockPaymentRepository::new(),
        MockBookingRepository::new(),
        MockEntropy::new(),
    )
    .process(request)
    .await
    .expect_err("invalid amount");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn refund_transitions_completed_payment() {
    let booking_id = Uuid::new_v4();
    let payment = sample_payment(booking_id, PaymentStatus::Completed);
    let payment_id = payment.id;

    let mut payment_repo = MockPaymentRepository::new();
    payment_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(payment)));
    payment_repo
        .expect_update()
        .times(1)
        .withf(|payment| payment.status == PaymentStatus::Refunded)
        .return_once(|_| Ok(()));

    let mut booking_repo = booking_repo_returning(sample_booking(booking_id));
    booking_repo
        .expect_update()
        .times(1)
        .withf(|booking| booking.payment_state == PaymentState::Refunded)
        .return_once(|_| Ok(()));

    let refunded = service(payment_repo, booking_repo, MockEntropy::new())
        .refund(RefundPaymentRequest {
            payment_id,
            reason: Some("tour cancelled".to_owned()),
        })
        .await
        .expect("refund succeeds");

    assert_eq!(refunded.status, PaymentStatus::Refunded);
    assert_eq!(refunded.refund_reason.as_deref(), Some("tour cancelled"));
    assert!(refunded.failure_reason.is_none());
}

#[tokio::test]
async fn refund_rejected_for_non_completed_payment() {
    let payment = sample_payment(Uuid::new_v4(), PaymentStatus::Failed);
    let payment_id = payment.id;

    let mut payment_repo = MockPaymentRepository::new();
    payment_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(payment)));
    payment_repo.expect_update().times(0);

    let error = service(
        payment_repo,
        MockBookingRepository::new(),
        MockEntropy::new(),
    )
    .refund(RefundPaymentRequest {
        payment_id,
        reason: None,
    })
    .await
    .expect_err("failed payment cannot be refunded");

    assert_eq!(error.code(), ErrorCode::IllegalTransition);
}

#[tokio::test]
async fn list_for_booking_maps_connection_error() {
    let mut payment_repo = MockPaymentRepository::new();
    payment_repo
        .expect_list_for_booking()
        .times(1)
        .return_once(|_| Err(PaymentRepositoryError::connection("pool unavailable")));

    let error = service(
        payment_repo,
        MockBookingRepository::new(),
        MockEntropy::new(),
    )
    .list_for_booking(&Uuid::new_v4())
    .await
    .expect_err("service unavailable");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
