//! Booking aggregate and its status state machine.
//!
//! Status transitions are guarded by an explicit table: pending may move to
//! confirmed or cancelled, confirmed to completed or cancelled, and both
//! completed and cancelled are terminal. The payment state varies
//! independently of the booking status (a booking can be confirmed while its
//! payment is still pending).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Created, awaiting provider confirmation.
    Pending,
    /// Confirmed by the provider.
    Confirmed,
    /// Cancelled by either party; terminal.
    Cancelled,
    /// Trip took place; terminal.
    Completed,
}

impl BookingStatus {
    /// Returns the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// The legal transition table.
    ///
    /// # Examples
    ///
    /// ```
    /// # use backend::domain::BookingStatus;
    /// assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
    /// assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Pending));
    /// ```
    pub fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed | Self::Cancelled)
                | (Self::Confirmed, Self::Completed | Self::Cancelled)
        )
    }

    /// Whether no further transitions are permitted from this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown booking status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBookingStatusError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::fmt::Display for ParseBookingStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown booking status: {}", self.input)
    }
}

impl std::error::Error for ParseBookingStatusError {}

impl std::str::FromStr for BookingStatus {
    type Err = ParseBookingStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseBookingStatusError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Payment progress tracked independently of the booking status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    /// No successful payment recorded yet.
    Pending,
    /// A payment completed for the booking amount.
    Paid,
    /// A completed payment was refunded.
    Refunded,
}

impl PaymentState {
    /// Returns the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Refunded => "refunded",
        }
    }
}

impl std::fmt::Display for PaymentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable booking code shown to customers and providers.
///
/// Format: `VT` followed by six digits derived from the creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingNumber(String);

impl BookingNumber {
    /// Derive a booking number from a creation timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// # use backend::domain::BookingNumber;
    /// # use chrono::TimeZone;
    /// let at = chrono::Utc.timestamp_millis_opt(1_706_000_123_456).single().expect("valid ts");
    /// assert_eq!(BookingNumber::from_timestamp(&at).as_str(), "VT123456");
    /// ```
    pub fn from_timestamp(at: &DateTime<Utc>) -> Self {
        let suffix = at.timestamp_millis().rem_euclid(1_000_000);
        Self(format!("VT{suffix:06}"))
    }

    /// Borrow the code as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for BookingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emergency contact supplied with a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    /// Contact person's name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Relationship to the traveller.
    pub relationship: String,
}

/// Error raised when a status change violates the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal booking transition: {from} -> {to}")]
pub struct IllegalTransitionError {
    /// Current status the booking is in.
    pub from: BookingStatus,
    /// Status the caller attempted to move to.
    pub to: BookingStatus,
}

/// A reservation linking a customer to a tour service for a date range.
///
/// `total_amount` is fixed at creation time (`price × number_of_people`) and
/// never recomputed by status-only updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Stable identifier.
    pub id: Uuid,
    /// Human-readable booking code.
    pub booking_number: BookingNumber,
    /// The booked tour service.
    pub service_id: Uuid,
    /// Tour name snapshot at booking time.
    pub service_name: String,
    /// Provider owning the booked tour.
    pub provider_id: Uuid,
    /// Provider name snapshot at booking time.
    pub provider_name: String,
    /// The customer who booked.
    pub customer_id: UserId,
    /// Customer display name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Inclusive trip start.
    pub start_date: NaiveDate,
    /// Inclusive trip end.
    pub end_date: NaiveDate,
    /// Party size.
    pub number_of_people: u32,
    /// Fixed total in VND: price × party size at creation.
    pub total_amount: i64,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Payment progress, independent of `status`.
    pub payment_state: PaymentState,
    /// Optional free-text requests from the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// Optional emergency contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,
    /// Reason recorded when the booking was cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Move the booking to `next`, enforcing the transition table.
    pub fn transition_to(
        &mut self,
        next: BookingStatus,
        now: DateTime<Utc>,
    ) -> Result<(), IllegalTransitionError> {
        if !self.status.can_transition_to(next) {
            return Err(IllegalTransitionError {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.updated_at = now;
        Ok(())
    }

    /// Cancel the booking, recording the reason.
    ///
    /// Permitted only from non-terminal statuses; cancelling a cancelled or
    /// completed booking is rejected.
    pub fn cancel(
        &mut self,
        reason: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<(), IllegalTransitionError> {
        self.transition_to(BookingStatus::Cancelled, now)?;
        self.cancellation_reason = Some(reason.into());
        Ok(())
    }
}
