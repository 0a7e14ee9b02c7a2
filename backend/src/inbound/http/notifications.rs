//! Notification inbox and preference endpoints.
//!
//! ```text
//! GET  /api/v1/notifications
//! POST /api/v1/notifications/{id}/read
//! POST /api/v1/notifications/read-all
//! GET  /api/v1/notification-preferences
//! PUT  /api/v1/notification-preferences
//! ```

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Notification, NotificationPreferences};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::tours::to_json_value;

/// Response payload for a notification.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(format = "uuid")]
    pub user_id: String,
    /// Category: `booking`, `payment`, `reminder`, `promotion` or `system`.
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    /// Read state: `unread`, `read` or `archived`.
    pub status: String,
    pub action_url: Option<String>,
    /// Structured references: bookingId, paymentId, amount.
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub read_at: Option<String>,
}

impl TryFrom<Notification> for NotificationResponseBody {
    type Error = crate::domain::Error;

    fn try_from(notification: Notification) -> Result<Self, Self::Error> {
        Ok(Self {
            id: notification.id.to_string(),
            user_id: notification.user_id.to_string(),
            kind: notification.kind.as_str().to_owned(),
            title: notification.title,
            message: notification.message,
            status: notification.status.as_str().to_owned(),
            action_url: notification.action_url,
            metadata: notification.metadata.map(to_json_value).transpose()?,
            created_at: notification.created_at.to_rfc3339(),
            read_at: notification.read_at.map(|at| at.to_rfc3339()),
        })
    }
}

/// Response payload for a bulk read operation.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkAllReadResponseBody {
    /// How many notifications moved from unread to read.
    pub updated: u32,
}

/// Delivery preference toggles, both as request and response payload.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferencesBody {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub push_notifications: bool,
    pub booking_updates: bool,
    pub payment_reminders: bool,
    pub promotional_offers: bool,
    pub system_alerts: bool,
}

impl From<NotificationPreferences> for NotificationPreferencesBody {
    fn from(preferences: NotificationPreferences) -> Self {
        Self {
            email_notifications: preferences.email_notifications,
            sms_notifications: preferences.sms_notifications,
            push_notifications: preferences.push_notifications,
            booking_updates: preferences.booking_updates,
            payment_reminders: preferences.payment_reminders,
            promotional_offers: preferences.promotional_offers,
            system_alerts: preferences.system_alerts,
        }
    }
}

impl NotificationPreferencesBody {
    fn into_domain(self, user_id: crate::domain::UserId) -> NotificationPreferences {
        NotificationPreferences {
            user_id,
            email_notifications: self.email_notifications,
            sms_notifications: self.sms_notifications,
            push_notifications: self.push_notifications,
            booking_updates: self.booking_updates,
            payment_reminders: self.payment_reminders,
            promotional_offers: self.promotional_offers,
            system_alerts: self.system_alerts,
        }
    }
}

/// List the signed-in user's notifications, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    responses(
        (status = 200, description = "Notifications", body = Vec<NotificationResponseBody>),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["notifications"],
    operation_id = "listNotifications",
    security(("SessionCookie" = []))
)]
#[get("/notifications")]
pub async fn list_notifications(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<NotificationResponseBody>>> {
    let user_id = session.require_user_id()?;

    let notifications = state.notifications.list_for_user(&user_id).await?;
    let body = notifications
        .into_iter()
        .map(NotificationResponseBody::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(web::Json(body))
}

/// Mark one notification as read.
#[utoipa::path(
    post,
    path = "/api/v1/notifications/{id}/read",
    params(("id" = Uuid, Path, description = "Notification identifier")),
    responses(
        (status = 200, description = "Updated notification", body = NotificationResponseBody),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Unknown notification", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["notifications"],
    operation_id = "markNotificationRead",
    security(("SessionCookie" = []))
)]
#[post("/notifications/{id}/read")]
pub async fn mark_notification_read(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<NotificationResponseBody>> {
    session.require_user_id()?;

    let notification = state.notifications.mark_read(&path.into_inner()).await?;

    Ok(web::Json(NotificationResponseBody::try_from(notification)?))
}

/// Mark all of the signed-in user's unread notifications as read.
#[utoipa::path(
    post,
    path = "/api/v1/notifications/read-all",
    responses(
        (status = 200, description = "Count of updated notifications", body = MarkAllReadResponseBody),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["notifications"],
    operation_id = "markAllNotificationsRead",
    security(("SessionCookie" = []))
)]
#[post("/notifications/read-all")]
pub async fn mark_all_notifications_read(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<MarkAllReadResponseBody>> {
    let user_id = session.require_user_id()?;

    let updated = state.notifications.mark_all_read(&user_id).await?;

    Ok(web::Json(MarkAllReadResponseBody { updated }))
}

/// Fetch the signed-in user's delivery preferences.
///
/// Users with no saved preferences get the defaults: every toggle on except
/// promotional offers.
#[utoipa::path(
    get,
    path = "/api/v1/notification-preferences",
    responses(
        (status = 200, description = "Delivery preferences", body = NotificationPreferencesBody),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["notifications"],
    operation_id = "getNotificationPreferences",
    security(("SessionCookie" = []))
)]
#[get("/notification-preferences")]
pub async fn get_notification_preferences(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<NotificationPreferencesBody>> {
    let user_id = session.require_user_id()?;

    let preferences = state.notifications.preferences(&user_id).await?;

    Ok(web::Json(NotificationPreferencesBody::from(preferences)))
}

/// Replace the signed-in user's delivery preferences.
#[utoipa::path(
    put,
    path = "/api/v1/notification-preferences",
    request_body = NotificationPreferencesBody,
    responses(
        (status = 200, description = "Saved preferences", body = NotificationPreferencesBody),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["notifications"],
    operation_id = "updateNotificationPreferences",
    security(("SessionCookie" = []))
)]
#[put("/notification-preferences")]
pub async fn update_notification_preferences(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<NotificationPreferencesBody>,
) -> ApiResult<web::Json<NotificationPreferencesBody>> {
    let user_id = session.require_user_id()?;

    let saved = state
        .notifications
        .update_preferences(payload.into_inner().into_domain(user_id))
        .await?;

    Ok(web::Json(NotificationPreferencesBody::from(saved)))
}

#[cfg(test)]
#[path = "notifications_tests.rs"]
mod tests;
