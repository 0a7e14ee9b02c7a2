//! Payment aggregate, methods, and the configurable fee schedule.
//!
//! A declined payment is a valid terminal [`Payment`] with
//! [`PaymentStatus::Failed`] and a failure reason; it is never surfaced as a
//! domain error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::money::fee_from_basis_points;

/// Supported payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Visa, Mastercard, JCB.
    CreditCard,
    /// Direct bank transfer.
    BankTransfer,
    /// MoMo, ZaloPay, VNPay.
    EWallet,
    /// Cash at the agency office.
    Cash,
}

impl PaymentMethod {
    /// Returns the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::BankTransfer => "bank_transfer",
            Self::EWallet => "e_wallet",
            Self::Cash => "cash",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown payment method string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePaymentMethodError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::fmt::Display for ParsePaymentMethodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown payment method: {}", self.input)
    }
}

impl std::error::Error for ParsePaymentMethodError {}

impl std::str::FromStr for PaymentMethod {
    type Err = ParsePaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit_card" => Ok(Self::CreditCard),
            "bank_transfer" => Ok(Self::BankTransfer),
            "e_wallet" => Ok(Self::EWallet),
            "cash" => Ok(Self::Cash),
            _ => Err(ParsePaymentMethodError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Per-method processing fees in basis points of the charged amount.
///
/// Configurable rather than hard-coded; defaults reproduce the reference
/// policy (credit card 2.5%, e-wallet 1.5%, bank transfer and cash free).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSchedule {
    /// Fee for [`PaymentMethod::CreditCard`].
    pub credit_card_bps: u32,
    /// Fee for [`PaymentMethod::EWallet`].
    pub e_wallet_bps: u32,
    /// Fee for [`PaymentMethod::BankTransfer`].
    pub bank_transfer_bps: u32,
    /// Fee for [`PaymentMethod::Cash`].
    pub cash_bps: u32,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            credit_card_bps: 250,
            e_wallet_bps: 150,
            bank_transfer_bps: 0,
            cash_bps: 0,
        }
    }
}

impl FeeSchedule {
    /// The basis points charged for the given method.
    pub fn basis_points_for(&self, method: PaymentMethod) -> u32 {
        match method {
            PaymentMethod::CreditCard => self.credit_card_bps,
            PaymentMethod::EWallet => self.e_wallet_bps,
            PaymentMethod::BankTransfer => self.bank_transfer_bps,
            PaymentMethod::Cash => self.cash_bps,
        }
    }

    /// The processing fee for charging `amount` via `method`, floored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use backend::domain::{FeeSchedule, PaymentMethod};
    /// let fees = FeeSchedule::default();
    /// assert_eq!(fees.fee_for(5_000_000, PaymentMethod::CreditCard), 125_000);
    /// assert_eq!(fees.fee_for(5_000_000, PaymentMethod::Cash), 0);
    /// ```
    pub fn fee_for(&self, amount: i64, method: PaymentMethod) -> i64 {
        fee_from_basis_points(amount, self.basis_points_for(method))
    }
}

/// Payment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Accepted but not yet submitted to the gateway.
    Pending,
    /// Submitted to the gateway, awaiting resolution.
    Processing,
    /// Gateway accepted the charge; terminal unless refunded.
    Completed,
    /// Gateway declined the charge; terminal.
    Failed,
    /// A completed charge was reversed; terminal.
    Refunded,
}

impl PaymentStatus {
    /// Returns the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw response captured from the (mock) payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    /// Gateway result code: `00` accepted, `05` declined.
    pub code: String,
    /// Gateway result message.
    pub message: String,
    /// Authorisation code, present on success only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
}

/// A charge attempt against a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Stable identifier.
    pub id: Uuid,
    /// The booking this payment settles.
    pub booking_id: Uuid,
    /// Charged amount in minor units of `currency`.
    pub amount: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Method used for the charge.
    pub method: PaymentMethod,
    /// Processing fee applied on top of `amount`.
    pub processing_fee: i64,
    /// Lifecycle status.
    pub status: PaymentStatus,
    /// Gateway transaction reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Raw gateway response, when one was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<GatewayResponse>,
    /// Reason the gateway declined the charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// Reason given when a completed charge was reversed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_reason: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// When the gateway accepted the charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}
