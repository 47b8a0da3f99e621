//! In-memory data store.
//!
//! A single `RwLock` over typed maps stands in for a database. Repositories
//! take read locks for queries and a write lock for mutations; the booking
//! repository performs its availability check and insert under one write
//! lock, so two concurrent submissions for the same car and range cannot
//! both succeed.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use domain::models::booking::Booking;
use domain::models::car::{Car, FuelType, Transmission};
use domain::models::customer::{Customer, CustomerStatus};
use domain::models::location::{Coordinates, Location};
use domain::models::notification::Notification;
use domain::models::scheduled_email::ScheduledEmail;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("Car is not available for the requested dates")]
    Unavailable,
}

/// Mutable store contents. Notifications keep insertion order (newest first);
/// everything else is keyed by id.
#[derive(Debug, Default)]
pub struct StoreInner {
    pub cars: HashMap<Uuid, Car>,
    pub bookings: HashMap<Uuid, Booking>,
    pub customers: HashMap<Uuid, Customer>,
    pub locations: HashMap<Uuid, Location>,
    pub notifications: Vec<Notification>,
    pub scheduled_emails: HashMap<Uuid, ScheduledEmail>,
}

/// Shared handle to the in-memory store.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the sample fleet, locations and customers.
    pub fn seeded() -> Self {
        let mut inner = StoreInner::default();
        seed(&mut inner);
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Acquires a read lock on the store contents.
    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, StoreInner> {
        self.inner.read().await
    }

    /// Acquires a write lock on the store contents.
    pub async fn write(&self) -> tokio::sync::RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().await
    }
}

fn seed_location(
    inner: &mut StoreInner,
    name: &str,
    address: &str,
    city: &str,
    state: &str,
    zip_code: &str,
    phone: &str,
    email: &str,
    hours: &str,
    lat: f64,
    lng: f64,
) -> Uuid {
    let location = Location {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip_code.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        hours: hours.to_string(),
        coordinates: Coordinates { lat, lng },
    };
    let id = location.id;
    inner.locations.insert(id, location);
    id
}

#[allow(clippy::too_many_arguments)]
fn seed_car(
    inner: &mut StoreInner,
    make: &str,
    model: &str,
    year: i32,
    fuel_type: FuelType,
    seats: i32,
    price_per_day: Decimal,
    location_id: Uuid,
    color: &str,
    license_plate: &str,
    description: &str,
) {
    let now = Utc::now();
    let car = Car {
        id: Uuid::new_v4(),
        make: make.to_string(),
        model: model.to_string(),
        year,
        transmission: Transmission::Automatic,
        fuel_type,
        seats,
        price_per_day,
        location_id,
        category: None,
        color: Some(color.to_string()),
        license_plate: Some(license_plate.to_string()),
        description: Some(description.to_string()),
        available: true,
        created_at: now,
        updated_at: now,
    };
    inner.cars.insert(car.id, car);
}

/// Seeds the sample data set: three offices, six cars, two customers.
fn seed(inner: &mut StoreInner) {
    let downtown = seed_location(
        inner,
        "Downtown Office",
        "123 Main St",
        "New York",
        "NY",
        "10001",
        "212-555-1234",
        "downtown@carrentalexample.com",
        "Mon-Fri: 8am-8pm, Sat-Sun: 9am-5pm",
        40.7128,
        -74.006,
    );
    let airport = seed_location(
        inner,
        "Airport Terminal",
        "JFK Airport, Terminal 4",
        "Jamaica",
        "NY",
        "11430",
        "212-555-5678",
        "airport@carrentalexample.com",
        "24/7",
        40.6413,
        -73.7781,
    );
    let uptown = seed_location(
        inner,
        "Uptown Branch",
        "456 Park Ave",
        "New York",
        "NY",
        "10022",
        "212-555-9012",
        "uptown@carrentalexample.com",
        "Mon-Fri: 9am-7pm, Sat: 10am-4pm, Sun: Closed",
        40.7624,
        -73.9738,
    );

    seed_car(
        inner,
        "Toyota",
        "Camry",
        2022,
        FuelType::Gasoline,
        5,
        dec!(50),
        downtown,
        "Silver",
        "ABC123",
        "Comfortable and reliable sedan, perfect for city driving.",
    );
    seed_car(
        inner,
        "Honda",
        "CR-V",
        2023,
        FuelType::Gasoline,
        5,
        dec!(65),
        airport,
        "Blue",
        "DEF456",
        "Spacious SUV with excellent fuel economy.",
    );
    seed_car(
        inner,
        "Ford",
        "Mustang",
        2022,
        FuelType::Gasoline,
        4,
        dec!(85),
        downtown,
        "Red",
        "GHI789",
        "Iconic sports car with powerful performance.",
    );
    seed_car(
        inner,
        "Tesla",
        "Model 3",
        2023,
        FuelType::Electric,
        5,
        dec!(95),
        uptown,
        "White",
        "JKL012",
        "Electric sedan with advanced technology.",
    );
    seed_car(
        inner,
        "BMW",
        "X5",
        2023,
        FuelType::Gasoline,
        5,
        dec!(120),
        airport,
        "Black",
        "MNO345",
        "Luxury SUV with premium features.",
    );
    seed_car(
        inner,
        "Mercedes-Benz",
        "C-Class",
        2022,
        FuelType::Gasoline,
        5,
        dec!(110),
        uptown,
        "Gray",
        "PQR678",
        "Luxury sedan with elegant design.",
    );

    for (name, email, phone, city, state) in [
        ("John Doe", "john@example.com", "555-123-4567", "New York", "NY"),
        ("Jane Smith", "jane@example.com", "555-987-6543", "Boston", "MA"),
    ] {
        let customer = Customer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: None,
            city: Some(city.to_string()),
            state: Some(state.to_string()),
            zip_code: None,
            country: Some("USA".to_string()),
            status: CustomerStatus::Active,
            joined_at: Utc::now(),
            total_bookings: 0,
            total_spent: Decimal::ZERO,
        };
        inner.customers.insert(customer.id, customer);
    }
}
