//! Tests for notification HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

use super::*;
use crate::domain::{
    Error, NotificationMetadata, NotificationStatus, NotificationType, UserId,
};
use crate::inbound::http::test_utils::{MockPorts, fixture_user_id, sign_in_cookie, test_app};

fn sample_notification(user_id: UserId) -> Notification {
    Notification {
        id: Uuid::new_v4(),
        user_id,
        kind: NotificationType::Booking,
        title: "Booking confirmed".to_owned(),
        message: "Your Ha Long Bay Cruise booking is confirmed.".to_owned(),
        status: NotificationStatus::Unread,
        action_url: Some("/bookings/1".to_owned()),
        metadata: Some(NotificationMetadata {
            booking_id: Some(Uuid::new_v4()),
            payment_id: None,
            amount: Some(5_000_000),
        }),
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 16, 8, 0, 0)
            .single()
            .expect("valid ts"),
        read_at: None,
    }
}

#[actix_web::test]
async fn listing_is_scoped_to_the_session_user() {
    let mut ports = MockPorts::default();
    ports
        .notifications
        .expect_list_for_user()
        .withf(|user_id| *user_id == fixture_user_id())
        .returning(|user_id| Ok(vec![sample_notification(user_id.clone())]));

    let app = actix_test::init_service(test_app(ports.into_state(), |config| {
        config.service(list_notifications);
    }))
    .await;
    let cookie = sign_in_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/notifications")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["type"], "booking");
    assert_eq!(body[0]["metadata"]["amount"], 5_000_000);
}

#[actix_web::test]
async fn marking_one_read_returns_the_updated_notification() {
    let notification_id = Uuid::new_v4();
    let mut ports = MockPorts::default();
    ports
        .notifications
        .expect_mark_read()
        .withf(move |id| *id == notification_id)
        .returning(|id| {
            let mut notification = sample_notification(fixture_user_id());
            notification.id = *id;
            notification.status = NotificationStatus::Read;
            notification.read_at = Some(notification.created_at + chrono::Duration::hours(2));
            Ok(notification)
        });

    let app = actix_test::init_service(test_app(ports.into_state(), |config| {
        config.service(mark_notification_read);
    }))
    .await;
    let cookie = sign_in_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/notifications/{notification_id}/read"))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["status"], "read");
    assert!(body["readAt"].is_string());
}

#[actix_web::test]
async fn unknown_notification_maps_to_not_found() {
    let mut ports = MockPorts::default();
    ports.notifications.expect_mark_read().returning(|id| {
        Err(Error::not_found(format!("notification {id} not found")))
    });

    let app = actix_test::init_service(test_app(ports.into_state(), |config| {
        config.service(mark_notification_read);
    }))
    .await;
    let cookie = sign_in_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/notifications/{}/read", Uuid::new_v4()))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn read_all_reports_the_updated_count() {
    let mut ports = MockPorts::default();
    ports
        .notifications
        .expect_mark_all_read()
        .withf(|user_id| *user_id == fixture_user_id())
        .returning(|_| Ok(3));

    let app = actix_test::init_service(test_app(ports.into_state(), |config| {
        config.service(mark_all_notifications_read);
    }))
    .await;
    let cookie = sign_in_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/notifications/read-all")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["updated"], 3);
}

#[actix_web::test]
async fn preferences_fall_back_to_the_defaults() {
    let mut ports = MockPorts::default();
    ports
        .notifications
        .expect_preferences()
        .withf(|user_id| *user_id == fixture_user_id())
        .returning(|user_id| Ok(NotificationPreferences::new_default(user_id.clone())));

    let app = actix_test::init_service(test_app(ports.into_state(), |config| {
        config.service(get_notification_preferences);
    }))
    .await;
    let cookie = sign_in_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/notification-preferences")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["bookingUpdates"], true);
    assert_eq!(body["promotionalOffers"], false);
}

#[actix_web::test]
async fn updating_preferences_echoes_the_saved_toggles() {
    let mut ports = MockPorts::default();
    ports
        .notifications
        .expect_update_preferences()
        .withf(|preferences| {
            preferences.user_id == fixture_user_id() && !preferences.sms_notifications
        })
        .returning(Ok);

    let app = actix_test::init_service(test_app(ports.into_state(), |config| {
        config.service(update_notification_preferences);
    }))
    .await;
    let cookie = sign_in_cookie(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/notification-preferences")
            .cookie(cookie)
            .set_json(json!({
                "emailNotifications": true,
                "smsNotifications": false,
                "pushNotifications": true,
                "bookingUpdates": true,
                "paymentReminders": true,
                "promotionalOffers": true,
                "systemAlerts": true
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["smsNotifications"], false);
    assert_eq!(body["promotionalOffers"], true);
}

#[actix_web::test]
async fn notification_endpoints_require_a_session() {
    let app = actix_test::init_service(test_app(
        MockPorts::default().into_state(),
        |config| {
            config.service(list_notifications);
        },
    ))
    .await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/notifications")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
