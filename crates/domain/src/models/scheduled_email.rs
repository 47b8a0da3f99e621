//! Scheduled follow-up email model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Template kind of a scheduled email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailTemplate {
    BookingConfirmation,
    PickupReminder,
    ReturnReminder,
    Receipt,
}

/// Delivery status of a scheduled email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduledEmailStatus {
    Scheduled,
    Sent,
    Cancelled,
}

/// A follow-up email queued for a booking, dispatched once its
/// `scheduled_for` time has passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEmail {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub template: EmailTemplate,
    pub scheduled_for: DateTime<Utc>,
    pub status: ScheduledEmailStatus,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
}

/// Request payload for scheduling an email for a booking.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEmailRequest {
    pub template: EmailTemplate,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Subject must be between 1 and 200 characters"
    ))]
    pub subject: String,

    #[validate(length(min = 1, message = "Body must not be empty"))]
    pub body: String,

    pub scheduled_for: DateTime<Utc>,
}

impl ScheduledEmail {
    /// Queues a new email for the given booking and recipient.
    pub fn new(booking_id: Uuid, recipient: impl Into<String>, request: ScheduleEmailRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            booking_id,
            recipient: recipient.into(),
            subject: request.subject,
            body: request.body,
            template: request.template,
            scheduled_for: request.scheduled_for,
            status: ScheduledEmailStatus::Scheduled,
            created_at: Utc::now(),
            sent_at: None,
        }
    }

    /// Whether this email is due for dispatch at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == ScheduledEmailStatus::Scheduled && self.scheduled_for <= now
    }
}
