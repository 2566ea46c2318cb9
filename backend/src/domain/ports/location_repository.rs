//! Driven port for location persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Coordinate, Location, LocationId, NewLocation, PostalAddress};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by location repository adapters.
    pub enum LocationRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "location store connection failed: {message}",
        /// The store did not answer within the configured bound.
        Timeout { message: String } =>
            "location store timed out: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } =>
            "location store query failed: {message}",
        /// No record matched the identifier.
        NotFound { id: String } =>
            "location {id} not found",
    }
}

/// CRUD primitives over the location collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: &LocationId)
    -> Result<Option<Location>, LocationRepositoryError>;

    /// Persist a new record; the store generates its identifier.
    async fn insert(&self, location: &NewLocation) -> Result<Location, LocationRepositoryError>;

    /// Replace the postal fields and coordinate of an existing record.
    ///
    /// Returns [`LocationRepositoryError::NotFound`] when nothing matched.
    async fn update_address(
        &self,
        id: &LocationId,
        postal: &PostalAddress,
        coordinate: Coordinate,
    ) -> Result<(), LocationRepositoryError>;

    /// Remove a record.
    ///
    /// Returns [`LocationRepositoryError::NotFound`] when nothing was removed.
    async fn delete(&self, id: &LocationId) -> Result<(), LocationRepositoryError>;
}
