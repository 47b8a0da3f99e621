//! Domain layer for the car rental backend.
//!
//! This crate contains:
//! - Domain models (Car, Booking, Customer, Location, Notification, ScheduledEmail)
//! - Business logic services, foremost the availability & pricing engine
//! - Domain error types

pub mod models;
pub mod services;
