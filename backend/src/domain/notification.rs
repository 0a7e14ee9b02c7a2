//! User-scoped notifications and delivery preferences.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

/// Notification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// Booking lifecycle updates.
    Booking,
    /// Payment confirmations.
    Payment,
    /// Payment reminders.
    Reminder,
    /// Promotional offers.
    Promotion,
    /// Platform announcements.
    System,
}

impl NotificationType {
    /// Returns the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Payment => "payment",
            Self::Reminder => "reminder",
            Self::Promotion => "promotion",
            Self::System => "system",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    /// Delivered but not yet opened.
    Unread,
    /// Opened by the user.
    Read,
    /// Hidden from the default inbox view.
    Archived,
}

impl NotificationStatus {
    /// Returns the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Read => "read",
            Self::Archived => "archived",
        }
    }
}

/// Structured references attached to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMetadata {
    /// Related booking, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<Uuid>,
    /// Related payment, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<Uuid>,
    /// Related amount in VND, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

/// A typed, user-scoped message tied to a lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Stable identifier.
    pub id: Uuid,
    /// The user this notification belongs to.
    pub user_id: UserId,
    /// Category of the notification.
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Read state; starts unread.
    pub status: NotificationStatus,
    /// Optional link the client should navigate to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    /// Optional structured references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NotificationMetadata>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// When the user first opened it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Mark the notification read.
    ///
    /// Idempotent: marking an already-read notification again is a no-op and
    /// keeps the original `read_at` timestamp. Archived notifications keep
    /// their status.
    pub fn mark_read(&mut self, now: DateTime<Utc>) {
        if self.status == NotificationStatus::Unread {
            self.status = NotificationStatus::Read;
            self.read_at = Some(now);
        }
    }
}

/// Per-user delivery toggles by channel and category.
///
/// Category toggles gate whether a notification of the matching
/// [`NotificationType`] is delivered at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct NotificationPreferences {
    /// The user these preferences belong to.
    pub user_id: UserId,
    /// Deliver over email.
    pub email_notifications: bool,
    /// Deliver over SMS.
    pub sms_notifications: bool,
    /// Deliver as push notifications.
    pub push_notifications: bool,
    /// Receive booking lifecycle updates.
    pub booking_updates: bool,
    /// Receive payment confirmations and reminders.
    pub payment_reminders: bool,
    /// Receive promotional offers.
    pub promotional_offers: bool,
    /// Receive platform announcements.
    pub system_alerts: bool,
}

impl NotificationPreferences {
    /// Default toggles for a user with no saved preferences: everything on
    /// except promotional offers.
    pub fn new_default(user_id: UserId) -> Self {
        Self {
            user_id,
            email_notifications: true,
            sms_notifications: true,
            push_notifications: true,
            booking_updates: true,
            payment_reminders: true,
            promotional_offers: false,
            system_alerts: true,
        }
    }

    /// Whether notifications of `kind` should be delivered to this user.
    pub fn allows(&self, kind: NotificationType) -> bool {
        match kind {
            NotificationType::Booking => self.booking_updates,
            NotificationType::Payment | NotificationType::Reminder => self.payment_reminders,
            NotificationType::Promotion => self.promotional_offers,
            NotificationType::System => self.system_alerts,
        }
    }
}
