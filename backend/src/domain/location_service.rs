//! Location domain service.
//!
//! Implements the location driving ports on top of the repository and
//! geocoder driven ports. Every create and update re-resolves the
//! coordinate; the stored name survives updates.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    CreateLocationRequest, Geocoder, GeocoderError, LocationCommand, LocationQuery,
    LocationRepository, LocationRepositoryError, UpdateLocationRequest,
};
use crate::domain::{Coordinate, Error, Location, LocationId, NewLocation, PostalAddress};

/// Location service implementing [`LocationCommand`] and [`LocationQuery`].
pub struct LocationService<R: ?Sized, G: ?Sized> {
    repository: Arc<R>,
    geocoder: Arc<G>,
}

impl<R: ?Sized, G: ?Sized> Clone for LocationService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            geocoder: Arc::clone(&self.geocoder),
        }
    }
}

impl<R: ?Sized, G: ?Sized> LocationService<R, G> {
    /// Create a service over the given store and geocoder.
    pub fn new(repository: Arc<R>, geocoder: Arc<G>) -> Self {
        Self {
            repository,
            geocoder,
        }
    }
}

impl<R, G> LocationService<R, G>
where
    R: LocationRepository + ?Sized,
    G: Geocoder + ?Sized,
{
    fn map_repository_error(error: LocationRepositoryError) -> Error {
        match error {
            LocationRepositoryError::NotFound { id } => {
                Error::not_found(format!("location {id} not found"))
            }
            LocationRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("location store unavailable: {message}"))
            }
            LocationRepositoryError::Timeout { message } => {
                Error::service_unavailable(format!("location store timed out: {message}"))
            }
            LocationRepositoryError::Query { message } => {
                Error::internal(format!("location store error: {message}"))
            }
        }
    }

    fn map_geocoder_error(error: &GeocoderError) -> Error {
        warn!(%error, "geocoding failed");
        Error::upstream_unavailable(format!("coordinates unavailable: {error}"))
    }

    async fn resolve(&self, postal: &PostalAddress) -> Result<Coordinate, Error> {
        let coordinate = self
            .geocoder
            .geocode(postal)
            .await
            .map_err(|err| Self::map_geocoder_error(&err))?;
        debug!(
            long = coordinate.long,
            lat = coordinate.lat,
            "address geocoded"
        );
        Ok(coordinate)
    }

    async fn find_existing(&self, id: &LocationId) -> Result<Location, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("location {id} not found")))
    }
}

#[async_trait]
impl<R, G> LocationQuery for LocationService<R, G>
where
    R: LocationRepository + ?Sized,
    G: Geocoder + ?Sized,
{
    async fn get(&self, id: &LocationId) -> Result<Location, Error> {
        self.find_existing(id).await
    }
}

#[async_trait]
impl<R, G> LocationCommand for LocationService<R, G>
where
    R: LocationRepository + ?Sized,
    G: Geocoder + ?Sized,
{
    async fn create(&self, request: CreateLocationRequest) -> Result<Location, Error> {
        let CreateLocationRequest { name, postal } = request;
        let coordinate = self.resolve(&postal).await?;
        let location = self
            .repository
            .insert(&NewLocation {
                name,
                postal,
                coordinate,
            })
            .await
            .map_err(Self::map_repository_error)?;
        info!(id = %location.id, "location created");
        Ok(location)
    }

    async fn update(&self, request: UpdateLocationRequest) -> Result<Location, Error> {
        let UpdateLocationRequest { current, postal } = request;
        let coordinate = self.resolve(&postal).await?;
        self.repository
            .update_address(&current.id, &postal, coordinate)
            .await
            .map_err(Self::map_repository_error)?;
        info!(id = %current.id, "location updated");
        Ok(current.relocated(postal, coordinate))
    }

    async fn delete(&self, id: &LocationId) -> Result<(), Error> {
        self.repository
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?;
        info!(%id, "location deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "location_service_tests.rs"]
mod tests;
