//! Receipt computation.
//!
//! Tax is an explicit markup layered on top of the engine's base price;
//! the engine itself never applies taxes or discounts.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Booking;
use crate::services::availability::{rental_days, DateRange};

/// Line-item breakdown for a booking receipt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub booking_id: uuid::Uuid,
    pub confirmation_code: String,
    pub days: i64,
    pub price_per_day: Decimal,
    pub subtotal: Decimal,
    pub tax_rate: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Builds a receipt for a booking.
///
/// The subtotal is the booking's stored `total_price` — the amount fixed at
/// creation time. Later changes to the car's daily rate never alter an issued
/// receipt; the displayed per-day rate is derived back from that stored
/// amount. `tax_rate` is a fraction (0.10 for 10%). All money values are
/// rounded to two decimals.
pub fn build_receipt(booking: &Booking, tax_rate: Decimal) -> Receipt {
    // Booking dates were validated at creation, so the range is well-formed.
    let days = DateRange::new(booking.start_date, booking.end_date)
        .map(|r| rental_days(&r))
        .unwrap_or(0);

    let subtotal = booking.total_price.round_dp(2);
    let price_per_day = if days > 0 {
        (subtotal / Decimal::from(days)).round_dp(2)
    } else {
        Decimal::ZERO
    };
    let tax = (subtotal * tax_rate).round_dp(2);
    let total = subtotal + tax;

    Receipt {
        booking_id: booking.id,
        confirmation_code: booking.confirmation_code.clone(),
        days,
        price_per_day,
        subtotal,
        tax_rate,
        tax,
        total,
    }
}
