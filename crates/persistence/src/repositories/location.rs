//! Location repository.
//!
//! Locations are seeded at startup; the API only reads them.

use domain::models::location::Location;
use uuid::Uuid;

use crate::store::{Store, StoreError};

/// Repository for rental office lookups.
#[derive(Debug, Clone)]
pub struct LocationRepository {
    store: Store,
}

impl LocationRepository {
    /// Creates a new LocationRepository over the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Location>, StoreError> {
        let inner = self.store.read().await;
        Ok(inner.locations.get(&id).cloned())
    }

    /// Lists offices sorted by name.
    pub async fn list(&self) -> Result<Vec<Location>, StoreError> {
        let inner = self.store.read().await;
        let mut locations: Vec<Location> = inner.locations.values().cloned().collect();
        locations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_seeded_locations_sorted() {
        let repo = LocationRepository::new(Store::seeded());
        let locations = repo.list().await.unwrap();
        assert_eq!(locations.len(), 3);
        let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Airport Terminal", "Downtown Office", "Uptown Branch"]
        );
    }
}
