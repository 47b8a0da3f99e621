//! Admin notification feed model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewBooking,
    BookingUpdate,
    CustomerUpdate,
    System,
}

/// Display priority of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
}

/// An entry in the admin notification feed.
///
/// Notifications are emitted as side effects of booking, customer and fleet
/// mutations. They carry no behavior of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub priority: NotificationPriority,
    pub read: bool,
    /// Id of the booking or customer this notification refers to, if any.
    pub related_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates an unread notification stamped with the current time.
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        priority: NotificationPriority,
        related_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message: message.into(),
            priority,
            read: false,
            related_id,
            created_at: Utc::now(),
        }
    }
}
