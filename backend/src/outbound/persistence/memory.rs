//! Process-local `LocationRepository` used when no database is configured.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{LocationRepository, LocationRepositoryError};
use crate::domain::{Coordinate, Location, LocationId, NewLocation, PostalAddress};

/// Location store held in memory for the lifetime of the process.
///
/// Identifiers are 24 hexadecimal characters drawn from a monotonic counter,
/// matching the shape the document store issues.
#[derive(Debug, Default)]
pub struct InMemoryLocationRepository {
    records: RwLock<HashMap<LocationId, Location>>,
    next_id: AtomicU64,
}

impl InMemoryLocationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue_id(&self) -> Result<LocationId, LocationRepositoryError> {
        let sequence = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        LocationId::new(format!("{sequence:024x}"))
            .map_err(|error| LocationRepositoryError::query(error.to_string()))
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn find_by_id(
        &self,
        id: &LocationId,
    ) -> Result<Option<Location>, LocationRepositoryError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn insert(&self, new: &NewLocation) -> Result<Location, LocationRepositoryError> {
        let location = Location::from_new(self.issue_id()?, new.clone());
        self.records
            .write()
            .await
            .insert(location.id.clone(), location.clone());
        Ok(location)
    }

    async fn update_address(
        &self,
        id: &LocationId,
        postal: &PostalAddress,
        coordinate: Coordinate,
    ) -> Result<(), LocationRepositoryError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(id)
            .ok_or_else(|| LocationRepositoryError::not_found(id.as_str()))?;
        record.postal = postal.clone();
        record.coordinate = coordinate;
        Ok(())
    }

    async fn delete(&self, id: &LocationId) -> Result<(), LocationRepositoryError> {
        self.records
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| LocationRepositoryError::not_found(id.as_str()))
    }
}
