//! Availability and pricing engine.
//!
//! Pure functions that decide whether a car is free over a requested date
//! range, how long a rental lasts, and what it costs. Every consumer of
//! overlap logic (booking creation, fleet search, blocked-date feeds,
//! utilization stats) goes through this module so the day-count and
//! boundary conventions stay consistent.
//!
//! Conventions:
//! - Ranges are inclusive on both ends: a booking ending on day D and one
//!   starting on day D conflict, since the car is in use that whole day.
//! - Day counts are inclusive: a same-day rental is 1 day, never 0.
//! - Only pending and confirmed bookings block; cancelled and completed
//!   bookings are ignored everywhere.
//!
//! Callers pre-filter bookings to the car in question; the engine never
//! filters by car id itself.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use thiserror::Error;

use crate::models::Booking;

/// Errors produced by the availability engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AvailabilityError {
    /// The requested range ends before it starts.
    #[error("Invalid date range: end date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// An inclusive calendar-day range. `end >= start` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AvailabilityError> {
        if end < start {
            return Err(AvailabilityError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First day of the range (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive day count. At least 1 by construction.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterates every calendar day in the range.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Inclusive rental duration in days.
pub fn rental_days(range: &DateRange) -> i64 {
    range.days()
}

/// Base rental price: price per day times inclusive day count.
///
/// No taxes or discounts; callers that add markup (e.g. the receipt's tax
/// line) layer it on top of this value explicitly. Rounded to two decimals.
pub fn rental_price(price_per_day: Decimal, range: &DateRange) -> Decimal {
    (price_per_day * Decimal::from(range.days())).round_dp(2)
}

/// Whether two inclusive day spans overlap.
fn overlaps(range: &DateRange, start: NaiveDate, end: NaiveDate) -> bool {
    range.start() <= end && start <= range.end()
}

/// Whether the candidate range is free of conflicting bookings.
///
/// `bookings` must already be filtered to the car in question. Cancelled and
/// completed bookings never conflict.
pub fn is_range_available(candidate: &DateRange, bookings: &[Booking]) -> bool {
    !bookings
        .iter()
        .filter(|b| b.status.is_blocking())
        .any(|b| overlaps(candidate, b.start_date, b.end_date))
}

/// Every calendar day occupied by a blocking booking, as a de-duplicated set.
///
/// Drives calendar UIs that disable already-booked days. Any date in this set,
/// used as either endpoint of a candidate range, makes `is_range_available`
/// return false.
pub fn blocked_dates(bookings: &[Booking]) -> BTreeSet<NaiveDate> {
    let mut dates = BTreeSet::new();
    for booking in bookings.iter().filter(|b| b.status.is_blocking()) {
        let mut day = booking.start_date;
        while day <= booking.end_date {
            dates.insert(day);
            let Some(next) = day.succ_opt() else { break };
            day = next;
        }
    }
    dates
}

/// Percentage of days within `window` covered by blocking bookings.
///
/// Overlapping bookings never double-count a day. Returns 0.0 when the
/// window contains no countable days.
pub fn utilization(bookings: &[Booking], window: &DateRange) -> f64 {
    let total_days = window.days();
    if total_days <= 0 {
        return 0.0;
    }

    let booked_days = blocked_dates(bookings)
        .into_iter()
        .filter(|d| *d >= window.start() && *d <= window.end())
        .count();

    booked_days as f64 / total_days as f64 * 100.0
}
