//! Driving port for notification dispatch.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    Booking, Error, Notification, NotificationMetadata, NotificationPreferences, NotificationType,
    Payment, UserId,
};

/// Request to deliver a notification to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateNotificationRequest {
    pub user_id: UserId,
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub action_url: Option<String>,
    pub metadata: Option<NotificationMetadata>,
}

/// Use-case trait for creating, reading and configuring notifications.
///
/// Creation respects the recipient's preferences: a suppressed category
/// yields `Ok(None)` rather than an error, so callers can fire-and-forget.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationCommand: Send + Sync {
    /// Deliver a notification unless the user's preferences suppress it.
    async fn create(
        &self,
        request: CreateNotificationRequest,
    ) -> Result<Option<Notification>, Error>;

    /// Notify a customer that their booking is confirmed.
    async fn send_booking_confirmation(
        &self,
        booking: &Booking,
    ) -> Result<Option<Notification>, Error>;

    /// Notify a customer that their payment went through.
    async fn send_payment_confirmation(
        &self,
        user_id: &UserId,
        payment: &Payment,
    ) -> Result<Option<Notification>, Error>;

    /// Remind a customer about an outstanding balance on a booking.
    async fn send_payment_reminder(
        &self,
        user_id: &UserId,
        booking: &Booking,
    ) -> Result<Option<Notification>, Error>;

    /// Mark one notification as read. Idempotent on already-read entries.
    async fn mark_read(&self, notification_id: &Uuid) -> Result<Notification, Error>;

    /// Mark all of a user's unread notifications as read, returning the count.
    async fn mark_all_read(&self, user_id: &UserId) -> Result<u32, Error>;

    /// List a user's notifications, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Notification>, Error>;

    /// Fetch a user's delivery preferences, falling back to the defaults.
    async fn preferences(&self, user_id: &UserId) -> Result<NotificationPreferences, Error>;

    /// Replace a user's delivery preferences.
    async fn update_preferences(
        &self,
        preferences: NotificationPreferences,
    ) -> Result<NotificationPreferences, Error>;
}
