//! Booking repository.
//!
//! Booking creation is the one place where the availability engine is called
//! under the store's write lock: the conflict check and the insert are atomic
//! with respect to each other, so two concurrent submissions for the same car
//! and range cannot both succeed.

use chrono::{DateTime, SubsecRound, Utc};
use domain::models::booking::{Booking, BookingStatus};
use domain::services::availability::{is_range_available, rental_price, DateRange};
use domain::services::confirmation::generate_confirmation_code;
use tracing::info;
use uuid::Uuid;

use crate::store::{Store, StoreError};

/// Input for creating a booking. Dates are already normalized to a valid
/// calendar range by the caller.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub car_id: Uuid,
    pub location_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub range: DateRange,
}

/// One page of bookings, newest first.
#[derive(Debug, Clone)]
pub struct BookingPage {
    pub items: Vec<Booking>,
    pub has_more: bool,
}

/// Repository for booking operations.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    store: Store,
}

impl BookingRepository {
    /// Creates a new BookingRepository over the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Creates a pending booking if the car is free over the requested range.
    ///
    /// Verifies the car and location exist, runs the availability check, and
    /// inserts — all under one write lock. The total price is fixed here from
    /// the car's current daily rate.
    pub async fn create(&self, input: NewBooking) -> Result<Booking, StoreError> {
        let mut inner = self.store.write().await;

        let car = inner
            .cars
            .get(&input.car_id)
            .ok_or(StoreError::NotFound("Car"))?;
        if !car.available {
            return Err(StoreError::Unavailable);
        }
        let price_per_day = car.price_per_day;

        if !inner.locations.contains_key(&input.location_id) {
            return Err(StoreError::NotFound("Location"));
        }

        let existing: Vec<Booking> = inner
            .bookings
            .values()
            .filter(|b| b.car_id == input.car_id)
            .cloned()
            .collect();
        if !is_range_available(&input.range, &existing) {
            return Err(StoreError::Unavailable);
        }

        // Microsecond precision so timestamps survive a pagination cursor
        // round-trip exactly.
        let now = Utc::now().trunc_subsecs(6);
        let booking = Booking {
            id: Uuid::new_v4(),
            car_id: input.car_id,
            location_id: input.location_id,
            customer_name: input.customer_name,
            customer_email: input.customer_email,
            customer_phone: input.customer_phone,
            start_date: input.range.start(),
            end_date: input.range.end(),
            status: BookingStatus::Pending,
            total_price: rental_price(price_per_day, &input.range),
            confirmation_code: generate_confirmation_code(),
            cancellation_reason: None,
            created_at: now,
            updated_at: now,
        };
        inner.bookings.insert(booking.id, booking.clone());

        info!(
            booking_id = %booking.id,
            car_id = %booking.car_id,
            start_date = %booking.start_date,
            end_date = %booking.end_date,
            "Booking created"
        );

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, StoreError> {
        let inner = self.store.read().await;
        Ok(inner.bookings.get(&id).cloned())
    }

    /// All bookings for a car, regardless of status.
    pub async fn list_for_car(&self, car_id: Uuid) -> Result<Vec<Booking>, StoreError> {
        let inner = self.store.read().await;
        let mut bookings: Vec<Booking> = inner
            .bookings
            .values()
            .filter(|b| b.car_id == car_id)
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.start_date);
        Ok(bookings)
    }

    /// Lists bookings newest first, optionally filtered, resuming after the
    /// given `(created_at, id)` cursor position.
    pub async fn list_page(
        &self,
        limit: usize,
        after: Option<(DateTime<Utc>, Uuid)>,
        status: Option<BookingStatus>,
        car_id: Option<Uuid>,
    ) -> Result<BookingPage, StoreError> {
        let inner = self.store.read().await;
        let mut bookings: Vec<Booking> = inner
            .bookings
            .values()
            .filter(|b| status.map_or(true, |s| b.status == s))
            .filter(|b| car_id.map_or(true, |c| b.car_id == c))
            .cloned()
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        // Descending order, so "after the cursor" means a strictly smaller
        // (created_at, id) tuple.
        let remaining: Vec<Booking> = bookings
            .into_iter()
            .filter(|b| after.map_or(true, |cursor| (b.created_at, b.id) < cursor))
            .collect();

        let has_more = remaining.len() > limit;
        Ok(BookingPage {
            items: remaining.into_iter().take(limit).collect(),
            has_more,
        })
    }

    /// Applies a status transition, recording an optional reason.
    ///
    /// Invalid transitions surface as a conflict.
    pub async fn transition(
        &self,
        id: Uuid,
        next: BookingStatus,
        reason: Option<String>,
    ) -> Result<Booking, StoreError> {
        let mut inner = self.store.write().await;
        let booking = inner
            .bookings
            .get_mut(&id)
            .ok_or(StoreError::NotFound("Booking"))?;
        booking
            .transition_to(next, reason)
            .map_err(|e| StoreError::Conflict(e.to_string()))?;

        info!(booking_id = %id, status = %next, "Booking status changed");
        Ok(booking.clone())
    }
}
