//! Repository implementations over the in-memory store.

pub mod booking;
pub mod car;
pub mod customer;
pub mod location;
pub mod notification;
pub mod scheduled_email;

pub use booking::{BookingPage, BookingRepository, NewBooking};
pub use car::CarRepository;
pub use customer::CustomerRepository;
pub use location::LocationRepository;
pub use notification::NotificationRepository;
pub use scheduled_email::ScheduledEmailRepository;
