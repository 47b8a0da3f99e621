//! Car repository.

use domain::models::car::{Car, UpdateCarRequest};
use uuid::Uuid;

use crate::store::{Store, StoreError};

/// Repository for fleet operations.
#[derive(Debug, Clone)]
pub struct CarRepository {
    store: Store,
}

impl CarRepository {
    /// Creates a new CarRepository over the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Inserts a car, rejecting duplicate license plates and unknown
    /// locations.
    pub async fn insert(&self, car: Car) -> Result<Car, StoreError> {
        let mut inner = self.store.write().await;
        if let Some(plate) = car.license_plate.as_deref() {
            if inner
                .cars
                .values()
                .any(|c| c.license_plate.as_deref() == Some(plate))
            {
                return Err(StoreError::Conflict(format!(
                    "A car with license plate {} already exists",
                    plate
                )));
            }
        }
        if !inner.locations.contains_key(&car.location_id) {
            return Err(StoreError::NotFound("Location"));
        }
        inner.cars.insert(car.id, car.clone());
        Ok(car)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, StoreError> {
        let inner = self.store.read().await;
        Ok(inner.cars.get(&id).cloned())
    }

    /// Lists the fleet, newest first.
    pub async fn list(&self) -> Result<Vec<Car>, StoreError> {
        let inner = self.store.read().await;
        let mut cars: Vec<Car> = inner.cars.values().cloned().collect();
        cars.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(cars)
    }

    /// Applies a partial update, returning the updated car. A relocation must
    /// point at an existing location.
    pub async fn update(&self, id: Uuid, request: UpdateCarRequest) -> Result<Car, StoreError> {
        let mut inner = self.store.write().await;
        if !inner.cars.contains_key(&id) {
            return Err(StoreError::NotFound("Car"));
        }
        if let Some(location_id) = request.location_id {
            if !inner.locations.contains_key(&location_id) {
                return Err(StoreError::NotFound("Location"));
            }
        }
        let car = inner
            .cars
            .get_mut(&id)
            .ok_or(StoreError::NotFound("Car"))?;
        car.apply_update(request);
        Ok(car.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain::models::car::{FuelType, Transmission};
    use domain::models::{Coordinates, Location};
    use rust_decimal_macros::dec;

    async fn store_with_location() -> (Store, Uuid) {
        let store = Store::new();
        let location = Location {
            id: Uuid::new_v4(),
            name: "Test Office".to_string(),
            address: "1 Test St".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            phone: "212-555-0000".to_string(),
            email: "test@carrentalexample.com".to_string(),
            hours: "24/7".to_string(),
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
        };
        let id = location.id;
        store.write().await.locations.insert(id, location);
        (store, id)
    }

    fn car(plate: &str, location_id: Uuid) -> Car {
        let now = Utc::now();
        Car {
            id: Uuid::new_v4(),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2022,
            transmission: Transmission::Automatic,
            fuel_type: FuelType::Gasoline,
            seats: 5,
            price_per_day: dec!(50),
            location_id,
            category: None,
            color: None,
            license_plate: Some(plate.to_string()),
            description: None,
            available: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn empty_update() -> UpdateCarRequest {
        UpdateCarRequest {
            make: None,
            model: None,
            year: None,
            transmission: None,
            fuel_type: None,
            seats: None,
            price_per_day: None,
            location_id: None,
            category: None,
            color: None,
            license_plate: None,
            description: None,
            available: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let (store, location_id) = store_with_location().await;
        let repo = CarRepository::new(store);
        let inserted = repo.insert(car("AAA111", location_id)).await.unwrap();
        let found = repo.find_by_id(inserted.id).await.unwrap().unwrap();
        assert_eq!(found.license_plate.as_deref(), Some("AAA111"));
    }

    #[tokio::test]
    async fn test_duplicate_license_plate_rejected() {
        let (store, location_id) = store_with_location().await;
        let repo = CarRepository::new(store);
        repo.insert(car("AAA111", location_id)).await.unwrap();
        let err = repo.insert(car("AAA111", location_id)).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_insert_unknown_location_rejected() {
        let repo = CarRepository::new(Store::new());
        let err = repo.insert(car("AAA111", Uuid::new_v4())).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound("Location")));
    }

    #[tokio::test]
    async fn test_update_missing_car() {
        let repo = CarRepository::new(Store::new());
        let mut request = empty_update();
        request.available = Some(false);
        let err = repo.update(Uuid::new_v4(), request).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound("Car")));
    }

    #[tokio::test]
    async fn test_update_unknown_location_rejected() {
        let (store, location_id) = store_with_location().await;
        let repo = CarRepository::new(store);
        let inserted = repo.insert(car("AAA111", location_id)).await.unwrap();

        let mut request = empty_update();
        request.location_id = Some(Uuid::new_v4());
        let err = repo.update(inserted.id, request).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound("Location")));

        // The car keeps its original location.
        let found = repo.find_by_id(inserted.id).await.unwrap().unwrap();
        assert_eq!(found.location_id, location_id);
    }
}
