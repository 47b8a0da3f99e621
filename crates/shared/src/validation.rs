//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

/// Earliest accepted model year for fleet vehicles.
const MIN_MODEL_YEAR: i32 = 1980;

/// Latest accepted model year (next year's models ship early).
const MAX_MODEL_YEAR: i32 = 2035;

lazy_static! {
    // Digits, spaces, dashes, dots and parentheses, optional leading +.
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9][0-9 \-\.\(\)]{5,19}$")
        .expect("phone regex is valid");
}

/// Validates a phone number in a permissive international format.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_phone");
        err.message = Some("Phone number format is invalid".into());
        Err(err)
    }
}

/// Validates that a model year is within the accepted range.
pub fn validate_model_year(year: i32) -> Result<(), ValidationError> {
    if (MIN_MODEL_YEAR..=MAX_MODEL_YEAR).contains(&year) {
        Ok(())
    } else {
        let mut err = ValidationError::new("year_range");
        err.message = Some(
            format!(
                "Model year must be between {} and {}",
                MIN_MODEL_YEAR, MAX_MODEL_YEAR
            )
            .into(),
        );
        Err(err)
    }
}

/// Validates that a seat count is within valid range (1 to 10).
pub fn validate_seats(seats: i32) -> Result<(), ValidationError> {
    if (1..=10).contains(&seats) {
        Ok(())
    } else {
        let mut err = ValidationError::new("seats_range");
        err.message = Some("Seat count must be between 1 and 10".into());
        Err(err)
    }
}

/// Validates that a daily price is non-negative.
pub fn validate_price_per_day(price: &Decimal) -> Result<(), ValidationError> {
    if *price >= Decimal::ZERO {
        Ok(())
    } else {
        let mut err = ValidationError::new("price_negative");
        err.message = Some("Price per day must be non-negative".into());
        Err(err)
    }
}
