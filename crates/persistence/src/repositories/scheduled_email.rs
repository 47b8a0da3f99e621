//! Scheduled email repository.

use chrono::{DateTime, Utc};
use domain::models::scheduled_email::{ScheduledEmail, ScheduledEmailStatus};
use uuid::Uuid;

use crate::store::{Store, StoreError};

/// Repository for queued follow-up emails.
#[derive(Debug, Clone)]
pub struct ScheduledEmailRepository {
    store: Store,
}

impl ScheduledEmailRepository {
    /// Creates a new ScheduledEmailRepository over the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn insert(&self, email: ScheduledEmail) -> Result<ScheduledEmail, StoreError> {
        let mut inner = self.store.write().await;
        inner.scheduled_emails.insert(email.id, email.clone());
        Ok(email)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ScheduledEmail>, StoreError> {
        let inner = self.store.read().await;
        Ok(inner.scheduled_emails.get(&id).cloned())
    }

    /// Emails queued for a booking, soonest first.
    pub async fn list_for_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<Vec<ScheduledEmail>, StoreError> {
        let inner = self.store.read().await;
        let mut emails: Vec<ScheduledEmail> = inner
            .scheduled_emails
            .values()
            .filter(|e| e.booking_id == booking_id)
            .cloned()
            .collect();
        emails.sort_by_key(|e| e.scheduled_for);
        Ok(emails)
    }

    /// All emails due for dispatch at `now`, soonest first.
    pub async fn list_due(&self, now: DateTime<Utc>) -> Result<Vec<ScheduledEmail>, StoreError> {
        let inner = self.store.read().await;
        let mut due: Vec<ScheduledEmail> = inner
            .scheduled_emails
            .values()
            .filter(|e| e.is_due(now))
            .cloned()
            .collect();
        due.sort_by_key(|e| e.scheduled_for);
        Ok(due)
    }

    /// Marks an email as sent. Only scheduled emails can be marked.
    pub async fn mark_sent(&self, id: Uuid, sent_at: DateTime<Utc>) -> Result<(), StoreError> {
        let mut inner = self.store.write().await;
        let email = inner
            .scheduled_emails
            .get_mut(&id)
            .ok_or(StoreError::NotFound("Scheduled email"))?;
        if email.status != ScheduledEmailStatus::Scheduled {
            return Err(StoreError::Conflict(format!(
                "Scheduled email {} has already been processed",
                id
            )));
        }
        email.status = ScheduledEmailStatus::Sent;
        email.sent_at = Some(sent_at);
        Ok(())
    }

    /// Cancels a pending email. Sent emails cannot be cancelled.
    pub async fn cancel(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.store.write().await;
        let email = inner
            .scheduled_emails
            .get_mut(&id)
            .ok_or(StoreError::NotFound("Scheduled email"))?;
        if email.status != ScheduledEmailStatus::Scheduled {
            return Err(StoreError::Conflict(format!(
                "Scheduled email {} has already been processed",
                id
            )));
        }
        email.status = ScheduledEmailStatus::Cancelled;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use domain::models::scheduled_email::{EmailTemplate, ScheduleEmailRequest};

    fn email(offset: Duration) -> ScheduledEmail {
        ScheduledEmail::new(
            Uuid::new_v4(),
            "john@example.com",
            ScheduleEmailRequest {
                template: EmailTemplate::PickupReminder,
                subject: "Reminder".to_string(),
                body: "See you soon.".to_string(),
                scheduled_for: Utc::now() + offset,
            },
        )
    }

    #[tokio::test]
    async fn test_list_due_filters_future_and_processed() {
        let repo = ScheduledEmailRepository::new(Store::new());
        let past = repo.insert(email(Duration::hours(-2))).await.unwrap();
        let sent = repo.insert(email(Duration::hours(-1))).await.unwrap();
        repo.insert(email(Duration::hours(1))).await.unwrap();
        repo.mark_sent(sent.id, Utc::now()).await.unwrap();

        let due = repo.list_due(Utc::now()).await.unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, past.id);
    }

    #[tokio::test]
    async fn test_cancel_sent_email_is_conflict() {
        let repo = ScheduledEmailRepository::new(Store::new());
        let e = repo.insert(email(Duration::hours(-1))).await.unwrap();
        repo.mark_sent(e.id, Utc::now()).await.unwrap();
        let err = repo.cancel(e.id).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }
}
