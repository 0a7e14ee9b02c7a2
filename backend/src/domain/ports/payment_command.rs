//! Driving port for payment processing.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, Payment, PaymentMethod};

/// Request to charge a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessPaymentRequest {
    pub booking_id: Uuid,
    pub amount: i64,
    pub currency: String,
    pub method: PaymentMethod,
}

/// Request to refund a completed payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundPaymentRequest {
    pub payment_id: Uuid,
    pub reason: Option<String>,
}

/// Use-case trait for charging, refunding and listing payments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentCommand: Send + Sync {
    /// Charge a booking, or return the already completed payment for it.
    async fn process(&self, request: ProcessPaymentRequest) -> Result<Payment, Error>;

    /// Refund a completed payment.
    async fn refund(&self, request: RefundPaymentRequest) -> Result<Payment, Error>;

    /// List every charge attempt against a booking, newest first.
    async fn list_for_booking(&self, booking_id: &Uuid) -> Result<Vec<Payment>, Error>;
}
