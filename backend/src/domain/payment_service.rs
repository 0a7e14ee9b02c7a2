//! Payment processing domain service.
//!
//! Implements the [`PaymentCommand`] driving port over a mock gateway: the
//! outcome of a charge is drawn from the injected entropy source against a
//! configurable success rate. A declined charge is a stored, terminal
//! [`Payment`] rather than an error, and a booking that already carries a
//! completed payment is never charged twice.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{
    BookingRepository, BookingRepositoryError, Entropy, PaymentCommand, PaymentRepository,
    PaymentRepositoryError, ProcessPaymentRequest, RefundPaymentRequest,
};
use crate::domain::{
    Booking, Error, FeeSchedule, GatewayResponse, Payment, PaymentState, PaymentStatus,
};

/// Length of the alphanumeric suffix on gateway authorisation codes.
const AUTH_CODE_LENGTH: usize = 6;

fn map_payment_repository_error(error: PaymentRepositoryError) -> Error {
    match error {
        PaymentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("payment repository unavailable: {message}"))
        }
        PaymentRepositoryError::Query { message } => {
            Error::internal(format!("payment repository error: {message}"))
        }
    }
}

fn map_booking_repository_error(error: BookingRepositoryError) -> Error {
    match error {
        BookingRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("booking repository unavailable: {message}"))
        }
        BookingRepositoryError::Query { message } => {
            Error::internal(format!("booking repository error: {message}"))
        }
    }
}

/// Payment service implementing the payment driving port.
#[derive(Clone)]
pub struct PaymentService<P, B> {
    payment_repo: Arc<P>,
    booking_repo: Arc<B>,
    clock: Arc<dyn Clock>,
    entropy: Arc<dyn Entropy>,
    fees: FeeSchedule,
    success_rate_percent: u32,
}

impl<P, B> PaymentService<P, B> {
    /// Create a new payment service.
    ///
    /// `success_rate_percent` is the share of charges the mock gateway
    /// accepts, in whole percent (90 reproduces the reference policy).
    pub fn new(
        payment_repo: Arc<P>,
        booking_repo: Arc<B>,
        clock: Arc<dyn Clock>,
        entropy: Arc<dyn Entropy>,
        fees: FeeSchedule,
        success_rate_percent: u32,
    ) -> Self {
        Self {
            payment_repo,
            booking_repo,
            clock,
            entropy,
            fees,
            success_rate_percent,
        }
    }

    fn gateway_accepts(&self) -> bool {
        self.entropy.unit() < f64::from(self.success_rate_percent) / 100.0
    }
}

impl<P, B> PaymentService<P, B>
where
    P: PaymentRepository,
    B: BookingRepository,
{
    async fn load_booking(&self, booking_id: &Uuid) -> Result<Booking, Error> {
        self.booking_repo
            .find_by_id(booking_id)
            .await
            .map_err(map_booking_repository_error)?
            .ok_or_else(|| Error::not_found(format!("booking {booking_id} not found")))
    }

    async fn record_payment_state(
        &self,
        booking_id: &Uuid,
        state: PaymentState,
    ) -> Result<(), Error> {
        let mut booking = self.load_booking(booking_id).await?;
        booking.payment_state = state;
        booking.updated_at = self.clock.utc();
        self.booking_repo
            .update(&booking)
            .await
            .map_err(map_booking_repository_error)
    }
}

#[async_trait]
impl<P, B> PaymentCommand for PaymentService<P, B>
where
    P: PaymentRepository,
    B: BookingRepository,
{
    async fn process(&self, request: ProcessPaymentRequest) -> Result<Payment, Error> {
        if request.amount <= 0 {
            return Err(Error::invalid_request("payment amount must be positive"));
        }
        if request.currency.trim().is_empty() {
            return Err(Error::invalid_request("currency must not be empty"));
        }

        // Resolve the booking first so a charge against an unknown booking
        // fails before the gateway draw.
        self.load_booking(&request.booking_id).await?;

        if let Some(existing) = self
            .payment_repo
            .find_completed_for_booking(&request.booking_id)
            .await
            .map_err(map_payment_repository_error)?
        {
            return Ok(existing);
        }

        let now = self.clock.utc();
        let mut payment = Payment {
            id: Uuid::new_v4(),
            booking_id: request.booking_id,
            amount: request.amount,
            currency: request.currency,
            method: request.method,
            processing_fee: self.fees.fee_for(request.amount, request.method),
            status: PaymentStatus::Processing,
            transaction_id: Some(format!("TXN{}", now.timestamp_millis())),
            gateway_response: None,
            failure_reason: None,
            refund_reason: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        };

        if self.gateway_accepts() {
            payment.status = PaymentStatus::Completed;
            payment.completed_at = Some(now);
            payment.gateway_response = Some(GatewayResponse {
                code: "00".to_owned(),
                message: "Transaction successful".to_owned(),
                auth_code: Some(format!("AUTH{}", self.entropy.token(AUTH_CODE_LENGTH))),
            });
        } else {
            payment.status = PaymentStatus::Failed;
            payment.failure_reason = Some("Insufficient funds or card declined".to_owned());
            payment.gateway_response = Some(GatewayResponse {
                code: "05".to_owned(),
                message: "Transaction declined".to_owned(),
                auth_code: None,
            });
        }

        // The lookup above is only a fast path; the repository re-checks
        // under its own guard, so a charge that lost the race returns the
        // winning payment instead of settling the booking twice.
        if let Some(existing) = self
            .payment_repo
            .insert_unless_completed(&payment)
            .await
            .map_err(map_payment_repository_error)?
        {
            return Ok(existing);
        }

        if payment.status == PaymentStatus::Completed {
            self.record_payment_state(&payment.booking_id, PaymentState::Paid)
                .await?;
        }

        Ok(payment)
    }

    async fn refund(&self, request: RefundPaymentRequest) -> Result<Payment, Error> {
        let mut payment = self
            .payment_repo
            .find_by_id(&request.payment_id)
            .await
            .map_err(map_payment_repository_error)?
            .ok_or_else(|| {
                Error::not_found(format!("payment {} not found", request.payment_id))
            })?;

        if payment.status != PaymentStatus::Completed {
            return Err(Error::illegal_transition(format!(
                "payment {} cannot be refunded from status {}",
                payment.id, payment.status
            )));
        }

        payment.status = PaymentStatus::Refunded;
        payment.refund_reason = request.reason;
        payment.updated_at = self.clock.utc();

        self.payment_repo
            .update(&payment)
            .await
            .map_err(map_payment_repository_error)?;

        self.record_payment_state(&payment.booking_id, PaymentState::Refunded)
            .await?;

        Ok(payment)
    }

    async fn list_for_booking(&self, booking_id: &Uuid) -> Result<Vec<Payment>, Error> {
        self.payment_repo
            .list_for_booking(booking_id)
            .await
            .map_err(map_payment_repository_error)
    }
}

#[cfg(test)]
#[path = "payment_service_tests.rs"]
mod tests;
