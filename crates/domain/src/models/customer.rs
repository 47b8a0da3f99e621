//! Customer domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::validation::validate_phone;
use uuid::Uuid;
use validator::Validate;

/// Account status of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

/// Represents a customer with booking aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub status: CustomerStatus,
    pub joined_at: DateTime<Utc>,
    /// Count of bookings ever made, maintained by the booking flow.
    pub total_bookings: i64,
    /// Sum of total prices across this customer's bookings.
    pub total_spent: Decimal,
}

/// Request payload for creating or updating a customer.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCustomerRequest {
    #[validate(length(
        min = 2,
        max = 100,
        message = "Name must be between 2 and 100 characters"
    ))]
    pub name: String,

    #[validate(email(message = "Email address is invalid"))]
    pub email: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

impl Customer {
    /// Creates a new active customer from a validated request.
    pub fn from_request(request: UpsertCustomerRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            city: request.city,
            state: request.state,
            zip_code: request.zip_code,
            country: request.country,
            status: CustomerStatus::Active,
            joined_at: Utc::now(),
            total_bookings: 0,
            total_spent: Decimal::ZERO,
        }
    }

    /// Records a new booking in the customer's aggregates.
    pub fn record_booking(&mut self, total_price: Decimal) {
        self.total_bookings += 1;
        self.total_spent += total_price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request() -> UpsertCustomerRequest {
        UpsertCustomerRequest {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-987-6543".to_string(),
            address: Some("456 Park Ave".to_string()),
            city: Some("Boston".to_string()),
            state: Some("MA".to_string()),
            zip_code: Some("02108".to_string()),
            country: Some("USA".to_string()),
        }
    }

    #[test]
    fn test_request_validation() {
        assert!(request().validate().is_ok());

        let mut bad = request();
        bad.email = "not-an-email".to_string();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_record_booking_updates_aggregates() {
        let mut customer = Customer::from_request(request());
        customer.record_booking(dec!(325));
        customer.record_booking(dec!(75));
        assert_eq!(customer.total_bookings, 2);
        assert_eq!(customer.total_spent, dec!(400));
    }
}
