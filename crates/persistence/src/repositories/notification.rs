//! Notification repository.

use domain::models::notification::Notification;
use uuid::Uuid;

use crate::store::{Store, StoreError};

/// Repository for the admin notification feed.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    store: Store,
}

impl NotificationRepository {
    /// Creates a new NotificationRepository over the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Prepends a notification to the feed.
    pub async fn push(&self, notification: Notification) -> Result<(), StoreError> {
        let mut inner = self.store.write().await;
        inner.notifications.insert(0, notification);
        Ok(())
    }

    /// Lists the feed, newest first, optionally only unread entries.
    pub async fn list(&self, unread_only: bool) -> Result<Vec<Notification>, StoreError> {
        let inner = self.store.read().await;
        Ok(inner
            .notifications
            .iter()
            .filter(|n| !unread_only || !n.read)
            .cloned()
            .collect())
    }

    pub async fn unread_count(&self) -> Result<usize, StoreError> {
        let inner = self.store.read().await;
        Ok(inner.notifications.iter().filter(|n| !n.read).count())
    }

    pub async fn mark_read(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.store.write().await;
        let notification = inner
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(StoreError::NotFound("Notification"))?;
        notification.read = true;
        Ok(())
    }

    pub async fn mark_all_read(&self) -> Result<(), StoreError> {
        let mut inner = self.store.write().await;
        for notification in inner.notifications.iter_mut() {
            notification.read = true;
        }
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.store.write().await;
        let before = inner.notifications.len();
        inner.notifications.retain(|n| n.id != id);
        if inner.notifications.len() == before {
            return Err(StoreError::NotFound("Notification"));
        }
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        let mut inner = self.store.write().await;
        inner.notifications.clear();
        Ok(())
    }
}
