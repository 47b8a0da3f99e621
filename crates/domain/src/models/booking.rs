//! Booking domain model and status state machine.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::validation::validate_phone;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of a booking.
///
/// Transitions: pending -> confirmed | cancelled; confirmed -> completed |
/// cancelled. Completed and cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Whether a booking in this status occupies the car for its date range.
    ///
    /// Only pending and confirmed bookings block availability. Cancelled and
    /// completed bookings never do.
    pub fn is_blocking(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// Whether this status permits a transition to `next`.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Completed)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Error raised by an invalid booking status transition.
#[derive(Debug, Error)]
#[error("Cannot transition booking from {from} to {to}")]
pub struct InvalidTransition {
    pub from: BookingStatus,
    pub to: BookingStatus,
}

/// Represents a rental booking for a car over an inclusive date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub car_id: Uuid,
    pub location_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    /// First rental day (inclusive).
    pub start_date: NaiveDate,
    /// Last rental day (inclusive).
    pub end_date: NaiveDate,
    pub status: BookingStatus,
    /// Price per day times inclusive day count, fixed at creation.
    pub total_price: Decimal,
    pub confirmation_code: String,
    /// Reason supplied when the booking was rejected or cancelled.
    pub cancellation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Applies a status transition, recording an optional reason.
    ///
    /// Returns `InvalidTransition` when the state machine forbids the move.
    pub fn transition_to(
        &mut self,
        next: BookingStatus,
        reason: Option<String>,
    ) -> Result<(), InvalidTransition> {
        if !self.status.can_transition_to(next) {
            return Err(InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        if reason.is_some() {
            self.cancellation_reason = reason;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Request payload for creating a booking.
///
/// Dates are ISO-8601 strings and normalized to calendar days before the
/// availability check; invalid ranges are rejected by the engine, not here.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub car_id: Uuid,

    pub location_id: Uuid,

    #[validate(length(
        min = 2,
        max = 100,
        message = "Name must be between 2 and 100 characters"
    ))]
    pub name: String,

    #[validate(email(message = "Email address is invalid"))]
    pub email: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    pub start_date: String,

    pub end_date: String,
}

/// Reason payload for reject/cancel actions.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingReasonRequest {
    #[validate(length(
        min = 1,
        max = 500,
        message = "Reason must be between 1 and 500 characters"
    ))]
    pub reason: String,
}
