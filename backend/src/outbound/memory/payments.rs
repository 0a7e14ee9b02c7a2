//! In-memory payment repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use super::{read_guard, write_guard};
use crate::domain::ports::{PaymentRepository, PaymentRepositoryError};
use crate::domain::{Payment, PaymentStatus};

/// Payment store over a guarded map.
#[derive(Debug, Default)]
pub struct InMemoryPaymentRepository {
    payments: RwLock<HashMap<Uuid, Payment>>,
}

impl InMemoryPaymentRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn insert_unless_completed(
        &self,
        payment: &Payment,
    ) -> Result<Option<Payment>, PaymentRepositoryError> {
        // Check and insert under the same write guard so racing charges
        // cannot both settle the booking.
        let mut payments = write_guard(&self.payments);
        let existing = payments
            .values()
            .find(|stored| {
                stored.booking_id == payment.booking_id
                    && stored.status == PaymentStatus::Completed
            })
            .cloned();
        if existing.is_none() {
            payments.insert(payment.id, payment.clone());
        }
        Ok(existing)
    }

    async fn find_by_id(
        &self,
        payment_id: &Uuid,
    ) -> Result<Option<Payment>, PaymentRepositoryError> {
        Ok(read_guard(&self.payments).get(payment_id).cloned())
    }

    async fn find_completed_for_booking(
        &self,
        booking_id: &Uuid,
    ) -> Result<Option<Payment>, PaymentRepositoryError> {
        Ok(read_guard(&self.payments)
            .values()
            .find(|payment| {
                payment.booking_id == *booking_id && payment.status == PaymentStatus::Completed
            })
            .cloned())
    }

    async fn update(&self, payment: &Payment) -> Result<(), PaymentRepositoryError> {
        let mut payments = write_guard(&self.payments);
        if !payments.contains_key(&payment.id) {
            return Err(PaymentRepositoryError::query(format!(
                "payment {} does not exist",
                payment.id
            )));
        }
        payments.insert(payment.id, payment.clone());
        Ok(())
    }

    async fn list_for_booking(
        &self,
        booking_id: &Uuid,
    ) -> Result<Vec<Payment>, PaymentRepositoryError> {
        let payments = read_guard(&self.payments);
        let mut matched: Vec<Payment> = payments
            .values()
            .filter(|payment| payment.booking_id == *booking_id)
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use crate::domain::PaymentMethod;

    fn payment_at(booking_id: Uuid, status: PaymentStatus, hour: u32) -> Payment {
        let created = Utc
            .with_ymd_and_hms(2024, 1, 20, hour, 0, 0)
            .single()
            .expect("valid ts");
        Payment {
            id: Uuid::new_v4(),
            booking_id,
            amount: 5_000_000,
            currency: "VND".to_owned(),
            method: PaymentMethod::CreditCard,
            processing_fee: 125_000,
            status,
            transaction_id: None,
            gateway_response: None,
            failure_reason: None,
            refund_reason: None,
            created_at: created,
            updated_at: created,
            completed_at: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn find_completed_skips_failed_attempts() {
        let repo = InMemoryPaymentRepository::new();
        let booking_id = Uuid::new_v4();
        let failed = payment_at(booking_id, PaymentStatus::Failed, 9);
        let completed = payment_at(booking_id, PaymentStatus::Completed, 10);

        repo.insert_unless_completed(&failed)
            .await
            .expect("insert succeeds");
        repo.insert_unless_completed(&completed)
            .await
            .expect("insert succeeds");

        let found = repo
            .find_completed_for_booking(&booking_id)
            .await
            .expect("lookup succeeds")
            .expect("completed payment present");
        assert_eq!(found.id, completed.id);
    }

    #[rstest]
    #[tokio::test]
    async fn find_completed_is_none_without_a_completed_charge() {
        let repo = InMemoryPaymentRepository::new();
        let booking_id = Uuid::new_v4();
        repo.insert_unless_completed(&payment_at(booking_id, PaymentStatus::Failed, 9))
            .await
            .expect("insert succeeds");

        let found = repo
            .find_completed_for_booking(&booking_id)
            .await
            .expect("lookup succeeds");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn list_for_booking_is_newest_first() {
        let repo = InMemoryPaymentRepository::new();
        let booking_id = Uuid::new_v4();
        let early = payment_at(booking_id, PaymentStatus::Failed, 8);
        let late = payment_at(booking_id, PaymentStatus::Completed, 15);
        let other = payment_at(Uuid::new_v4(), PaymentStatus::Completed, 12);

        for payment in [&early, &late, &other] {
            repo.insert_unless_completed(payment)
                .await
                .expect("insert succeeds");
        }

        let listed = repo
            .list_for_booking(&booking_id)
            .await
            .expect("listing succeeds");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, late.id);
    }

    #[rstest]
    #[tokio::test]
    async fn a_settled_booking_takes_no_further_charges() {
        let repo = InMemoryPaymentRepository::new();
        let booking_id = Uuid::new_v4();
        let first = payment_at(booking_id, PaymentStatus::Completed, 10);
        let second = payment_at(booking_id, PaymentStatus::Completed, 11);

        let skipped = repo
            .insert_unless_completed(&first)
            .await
            .expect("insert succeeds");
        assert!(skipped.is_none());

        let existing = repo
            .insert_unless_completed(&second)
            .await
            .expect("insert succeeds")
            .expect("existing completed charge returned");
        assert_eq!(existing.id, first.id);

        let listed = repo
            .list_for_booking(&booking_id)
            .await
            .expect("listing succeeds");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, first.id);
    }

    #[rstest]
    #[tokio::test]
    async fn update_rejects_unknown_payment() {
        let repo = InMemoryPaymentRepository::new();
        let payment = payment_at(Uuid::new_v4(), PaymentStatus::Completed, 9);

        let error = repo.update(&payment).await.expect_err("nothing stored");
        assert!(matches!(error, PaymentRepositoryError::Query { .. }));
    }
}
