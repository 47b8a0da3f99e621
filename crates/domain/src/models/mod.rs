//! Domain models for the car rental backend.

pub mod booking;
pub mod car;
pub mod customer;
pub mod location;
pub mod notification;
pub mod scheduled_email;

pub use booking::{Booking, BookingReasonRequest, BookingStatus, CreateBookingRequest};
pub use car::{Car, CreateCarRequest, FuelType, Transmission, UpdateCarRequest};
pub use customer::{Customer, CustomerStatus, UpsertCustomerRequest};
pub use location::{Coordinates, Location};
pub use notification::{Notification, NotificationKind, NotificationPriority};
pub use scheduled_email::{
    EmailTemplate, ScheduleEmailRequest, ScheduledEmail, ScheduledEmailStatus,
};
