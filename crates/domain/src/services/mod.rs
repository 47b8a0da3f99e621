//! Domain services for the car rental backend.
//!
//! Services contain business logic that operates on domain models.

pub mod availability;
pub mod confirmation;
pub mod receipt;

pub use availability::{
    blocked_dates, is_range_available, rental_days, rental_price, utilization, AvailabilityError,
    DateRange,
};
pub use confirmation::generate_confirmation_code;
pub use receipt::{build_receipt, Receipt};
