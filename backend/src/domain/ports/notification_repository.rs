//! Port for notification persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Notification, NotificationPreferences, UserId};

/// Errors raised by notification repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationRepositoryError {
    /// Repository connection could not be established.
    #[error("notification repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("notification repository query failed: {message}")]
    Query { message: String },
}

impl NotificationRepositoryError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for notification and preference storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Persist a new notification.
    async fn insert(&self, notification: &Notification)
    -> Result<(), NotificationRepositoryError>;

    /// Fetch a notification by id. Returns `None` when unknown.
    async fn find_by_id(
        &self,
        notification_id: &Uuid,
    ) -> Result<Option<Notification>, NotificationRepositoryError>;

    /// Replace a stored notification after a status change.
    async fn update(&self, notification: &Notification)
    -> Result<(), NotificationRepositoryError>;

    /// List a user's notifications, newest first.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Notification>, NotificationRepositoryError>;

    /// Mark every unread notification for a user as read.
    ///
    /// Returns the number of notifications transitioned. Runs as one
    /// operation in the adapter so no unread entry is skipped.
    async fn mark_all_read(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<u32, NotificationRepositoryError>;

    /// Fetch a user's delivery preferences, if saved.
    async fn find_preferences(
        &self,
        user_id: &UserId,
    ) -> Result<Option<NotificationPreferences>, NotificationRepositoryError>;

    /// Insert or replace a user's delivery preferences.
    async fn save_preferences(
        &self,
        preferences: &NotificationPreferences,
    ) -> Result<(), NotificationRepositoryError>;
}

/// Fixture implementation that stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNotificationRepository;

#[async_trait]
impl NotificationRepository for FixtureNotificationRepository {
    async fn insert(
        &self,
        _notification: &Notification,
    ) -> Result<(), NotificationRepositoryError> {
        Ok(())
    }

    async fn find_by_id(
        &self,
        _notification_id: &Uuid,
    ) -> Result<Option<Notification>, NotificationRepositoryError> {
        Ok(None)
    }

    async fn update(
        &self,
        _notification: &Notification,
    ) -> Result<(), NotificationRepositoryError> {
        Ok(())
    }

    async fn list_for_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        Ok(Vec::new())
    }

    async fn mark_all_read(
        &self,
        _user_id: &UserId,
        _now: DateTime<Utc>,
    ) -> Result<u32, NotificationRepositoryError> {
        Ok(0)
    }

    async fn find_preferences(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<NotificationPreferences>, NotificationRepositoryError> {
        Ok(None)
    }

    async fn save_preferences(
        &self,
        _preferences: &NotificationPreferences,
    ) -> Result<(), NotificationRepositoryError> {
        Ok(())
    }
}
