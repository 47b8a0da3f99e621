//! Rental location domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Geographic coordinates of a rental office.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Represents a rental office where cars are picked up and returned.
///
/// Locations are seeded at startup and read-only over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    /// Human-readable opening hours, e.g. "Mon-Fri: 8am-8pm" or "24/7".
    pub hours: String,
    pub coordinates: Coordinates,
}
