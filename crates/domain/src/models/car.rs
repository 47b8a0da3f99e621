//! Car domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::validation::{validate_model_year, validate_price_per_day, validate_seats};
use uuid::Uuid;
use validator::Validate;

/// Transmission type of a fleet vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Automatic,
    Manual,
    Cvt,
}

/// Fuel type of a fleet vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

/// Represents a car in the rental fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub seats: i32,
    /// Daily rental rate. Non-negative by validation at creation.
    pub price_per_day: Decimal,
    pub location_id: Uuid,
    pub category: Option<String>,
    pub color: Option<String>,
    pub license_plate: Option<String>,
    pub description: Option<String>,
    /// Whether the car is offered for rental at all. A car taken out of
    /// service never appears in search results, regardless of bookings.
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for adding a car to the fleet.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 50, message = "Make must be between 1 and 50 characters"))]
    pub make: String,

    #[validate(length(min = 1, max = 50, message = "Model must be between 1 and 50 characters"))]
    pub model: String,

    #[validate(custom(function = "validate_model_year"))]
    pub year: i32,

    pub transmission: Transmission,

    pub fuel_type: FuelType,

    #[validate(custom(function = "validate_seats"))]
    pub seats: i32,

    #[validate(custom(function = "validate_price_per_day"))]
    pub price_per_day: Decimal,

    pub location_id: Uuid,

    pub category: Option<String>,
    pub color: Option<String>,
    pub license_plate: Option<String>,
    pub description: Option<String>,
}

/// Request payload for updating a car. All fields optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    #[validate(length(min = 1, max = 50, message = "Make must be between 1 and 50 characters"))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Model must be between 1 and 50 characters"))]
    pub model: Option<String>,

    #[validate(custom(function = "validate_model_year"))]
    pub year: Option<i32>,

    pub transmission: Option<Transmission>,

    pub fuel_type: Option<FuelType>,

    #[validate(custom(function = "validate_seats"))]
    pub seats: Option<i32>,

    #[validate(custom(function = "validate_price_per_day"))]
    pub price_per_day: Option<Decimal>,

    pub location_id: Option<Uuid>,

    pub category: Option<String>,
    pub color: Option<String>,
    pub license_plate: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl Car {
    /// Creates a new car from a validated request.
    pub fn from_request(request: CreateCarRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            make: request.make,
            model: request.model,
            year: request.year,
            transmission: request.transmission,
            fuel_type: request.fuel_type,
            seats: request.seats,
            price_per_day: request.price_per_day,
            location_id: request.location_id,
            category: request.category,
            color: request.color,
            license_plate: request.license_plate,
            description: request.description,
            available: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies an update request in place, bumping `updated_at`.
    pub fn apply_update(&mut self, request: UpdateCarRequest) {
        if let Some(make) = request.make {
            self.make = make;
        }
        if let Some(model) = request.model {
            self.model = model;
        }
        if let Some(year) = request.year {
            self.year = year;
        }
        if let Some(transmission) = request.transmission {
            self.transmission = transmission;
        }
        if let Some(fuel_type) = request.fuel_type {
            self.fuel_type = fuel_type;
        }
        if let Some(seats) = request.seats {
            self.seats = seats;
        }
        if let Some(price_per_day) = request.price_per_day {
            self.price_per_day = price_per_day;
        }
        if let Some(location_id) = request.location_id {
            self.location_id = location_id;
        }
        if let Some(category) = request.category {
            self.category = Some(category);
        }
        if let Some(color) = request.color {
            self.color = Some(color);
        }
        if let Some(license_plate) = request.license_plate {
            self.license_plate = Some(license_plate);
        }
        if let Some(description) = request.description {
            self.description = Some(description);
        }
        if let Some(available) = request.available {
            self.available = available;
        }
        self.updated_at = Utc::now();
    }

    /// Display name used in notifications and emails, e.g. "Toyota Camry (2022)".
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_request() -> CreateCarRequest {
        CreateCarRequest {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2022,
            transmission: Transmission::Automatic,
            fuel_type: FuelType::Gasoline,
            seats: 5,
            price_per_day: dec!(50),
            location_id: Uuid::new_v4(),
            category: None,
            color: Some("Silver".to_string()),
            license_plate: Some("ABC123".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_create_request_valid() {
        assert!(create_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_bad_seats() {
        let mut request = create_request();
        request.seats = 0;
        assert!(request.validate().is_err());
        request.seats = 11;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_negative_price() {
        let mut request = create_request();
        request.price_per_day = dec!(-10);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_from_request_defaults_available() {
        let car = Car::from_request(create_request());
        assert!(car.available);
        assert_eq!(car.display_name(), "Toyota Camry (2022)");
    }

    #[test]
    fn test_apply_update_partial() {
        let mut car = Car::from_request(create_request());
        let before = car.updated_at;
        car.apply_update(UpdateCarRequest {
            make: None,
            model: None,
            year: None,
            transmission: None,
            fuel_type: None,
            seats: None,
            price_per_day: Some(dec!(55)),
            location_id: None,
            category: None,
            color: None,
            license_plate: None,
            description: None,
            available: Some(false),
        });
        assert_eq!(car.price_per_day, dec!(55));
        assert!(!car.available);
        assert_eq!(car.make, "Toyota");
        assert!(car.updated_at >= before);
    }
}
