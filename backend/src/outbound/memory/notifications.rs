//! In-memory notification and preference repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{read_guard, write_guard};
use crate::domain::ports::{NotificationRepository, NotificationRepositoryError};
use crate::domain::{Notification, NotificationPreferences, NotificationStatus, UserId};

/// Notification store over guarded maps.
#[derive(Debug, Default)]
pub struct InMemoryNotificationRepository {
    notifications: RwLock<HashMap<Uuid, Notification>>,
    preferences: RwLock<HashMap<UserId, NotificationPreferences>>,
}

impl InMemoryNotificationRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn insert(
        &self,
        notification: &Notification,
    ) -> Result<(), NotificationRepositoryError> {
        write_guard(&self.notifications).insert(notification.id, notification.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        notification_id: &Uuid,
    ) -> Result<Option<Notification>, NotificationRepositoryError> {
        Ok(read_guard(&self.notifications)
            .get(notification_id)
            .cloned())
    }

    async fn update(
        &self,
        notification: &Notification,
    ) -> Result<(), NotificationRepositoryError> {
        let mut notifications = write_guard(&self.notifications);
        if !notifications.contains_key(&notification.id) {
            return Err(NotificationRepositoryError::query(format!(
                "notification {} does not exist",
                notification.id
            )));
        }
        notifications.insert(notification.id, notification.clone());
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        let notifications = read_guard(&self.notifications);
        let mut matched: Vec<Notification> = notifications
            .values()
            .filter(|notification| notification.user_id == *user_id)
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn mark_all_read(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<u32, NotificationRepositoryError> {
        let mut notifications = write_guard(&self.notifications);
        let mut transitioned = 0_u32;
        for notification in notifications.values_mut() {
            if notification.user_id == *user_id
                && notification.status == NotificationStatus::Unread
            {
                notification.mark_read(now);
                transitioned += 1;
            }
        }
        Ok(transitioned)
    }

    async fn find_preferences(
        &self,
        user_id: &UserId,
    ) -> Result<Option<NotificationPreferences>, NotificationRepositoryError> {
        Ok(read_guard(&self.preferences).get(user_id).cloned())
    }

    async fn save_preferences(
        &self,
        preferences: &NotificationPreferences,
    ) -> Result<(), NotificationRepositoryError> {
        write_guard(&self.preferences)
            .insert(preferences.user_id.clone(), preferences.clone());
        Ok(())
    }
}
