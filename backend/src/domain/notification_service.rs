//! Notification dispatch domain service.
//!
//! Implements the [`NotificationCommand`] driving port. Delivery is gated by
//! the recipient's category toggles: a suppressed notification is not stored
//! and the call reports `None` rather than an error, so lifecycle code can
//! fire notifications without branching on preferences.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use uuid::Uuid;

use crate::domain::money::format_vnd;
use crate::domain::ports::{
    CreateNotificationRequest, NotificationCommand, NotificationRepository,
    NotificationRepositoryError,
};
use crate::domain::{
    Booking, Error, Notification, NotificationMetadata, NotificationPreferences,
    NotificationStatus, NotificationType, Payment, UserId,
};

fn map_repository_error(error: NotificationRepositoryError) -> Error {
    match error {
        NotificationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("notification repository unavailable: {message}"))
        }
        NotificationRepositoryError::Query { message } => {
            Error::internal(format!("notification repository error: {message}"))
        }
    }
}

/// Notification service implementing the dispatch driving port.
#[derive(Clone)]
pub struct NotificationService<R> {
    notification_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> NotificationService<R> {
    /// Create a new notification service.
    pub fn new(notification_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            notification_repo,
            clock,
        }
    }
}

impl<R> NotificationService<R>
where
    R: NotificationRepository,
{
    async fn preferences_for(&self, user_id: &UserId) -> Result<NotificationPreferences, Error> {
        let stored = self
            .notification_repo
            .find_preferences(user_id)
            .await
            .map_err(map_repository_error)?;
        Ok(stored.unwrap_or_else(|| NotificationPreferences::new_default(user_id.clone())))
    }
}

#[async_trait]
impl<R> NotificationCommand for NotificationService<R>
where
    R: NotificationRepository,
{
    async fn create(
        &self,
        request: CreateNotificationRequest,
    ) -> Result<Option<Notification>, Error> {
        let preferences = self.preferences_for(&request.user_id).await?;
        if !preferences.allows(request.kind) {
            return Ok(None);
        }

        let notification = Notification {
            id: Uuid::new_v4(),
            user_id: request.user_id,
            kind: request.kind,
            title: request.title,
            message: request.message,
            status: NotificationStatus::Unread,
            action_url: request.action_url,
            metadata: request.metadata,
            created_at: self.clock.utc(),
            read_at: None,
        };

        self.notification_repo
            .insert(&notification)
            .await
            .map_err(map_repository_error)?;

        Ok(Some(notification))
    }

    async fn send_booking_confirmation(
        &self,
        booking: &Booking,
    ) -> Result<Option<Notification>, Error> {
        self.create(CreateNotificationRequest {
            user_id: booking.customer_id.clone(),
            kind: NotificationType::Booking,
            title: "Booking confirmed".to_owned(),
            message: format!(
                "Your {} booking {} has been confirmed. We will be in touch soon.",
                booking.service_name, booking.booking_number
            ),
            action_url: Some(format!("/bookings/{}", booking.id)),
            metadata: Some(NotificationMetadata {
                booking_id: Some(booking.id),
                payment_id: None,
                amount: None,
            }),
        })
        .await
    }

    async fn send_payment_confirmation(
        &self,
        user_id: &UserId,
        payment: &Payment,
    ) -> Result<Option<Notification>, Error> {
        self.create(CreateNotificationRequest {
            user_id: user_id.clone(),
            kind: NotificationType::Payment,
            title: "Payment successful".to_owned(),
            message: format!(
                "Your payment of {} has been processed successfully.",
                format_vnd(payment.amount)
            ),
            action_url: Some(format!("/payments/{}", payment.id)),
            metadata: Some(NotificationMetadata {
                booking_id: Some(payment.booking_id),
                payment_id: Some(payment.id),
                amount: Some(payment.amount),
            }),
        })
        .await
    }

    async fn send_payment_reminder(
        &self,
        user_id: &UserId,
        booking: &Booking,
    ) -> Result<Option<Notification>, Error> {
        self.create(CreateNotificationRequest {
            user_id: user_id.clone(),
            kind: NotificationType::Reminder,
            title: "Payment reminder".to_owned(),
            message: format!(
                "Your booking {} is awaiting payment of {}. Please complete it to secure your seats.",
                booking.booking_number,
                format_vnd(booking.total_amount)
            ),
            action_url: Some(format!("/bookings/{}", booking.id)),
            metadata: Some(NotificationMetadata {
                booking_id: Some(booking.id),
                payment_id: None,
                amount: Some(booking.total_amount),
            }),
        })
        .await
    }

    async fn mark_read(&self, notification_id: &Uuid) -> Result<Notification, Error> {
        let mut notification = self
            .notification_repo
            .find_by_id(notification_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| {
                Error::not_found(format!("notification {notification_id} not found"))
            })?;

        notification.mark_read(self.clock.utc());

        self.notification_repo
            .update(&notification)
            .await
            .map_err(map_repository_error)?;

        Ok(notification)
    }

    async fn mark_all_read(&self, user_id: &UserId) -> Result<u32, Error> {
        self.notification_repo
            .mark_all_read(user_id, self.clock.utc())
            .await
            .map_err(map_repository_error)
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Notification>, Error> {
        self.notification_repo
            .list_for_user(user_id)
            .await
            .map_err(map_repository_error)
    }

    async fn preferences(&self, user_id: &UserId) -> Result<NotificationPreferences, Error> {
        self.preferences_for(user_id).await
    }

    async fn update_preferences(
        &self,
        preferences: NotificationPreferences,
    ) -> Result<NotificationPreferences, Error> {
        self.notification_repo
            .save_preferences(&preferences)
            .await
            .map_err(map_repository_error)?;
        Ok(preferences)
    }
}

#[cfg(test)]
#[path = "notification_service_tests.rs"]
mod tests;
