//! Driving port for location mutations.

use async_trait::async_trait;

use crate::domain::{Error, Location, LocationId, PostalAddress};

/// Input for [`LocationCommand::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLocationRequest {
    /// Display name stored verbatim.
    pub name: String,
    /// Address to geocode.
    pub postal: PostalAddress,
}

/// Input for [`LocationCommand::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateLocationRequest {
    /// Record as read by the caller; its id and name are kept.
    pub current: Location,
    /// Replacement address to geocode.
    pub postal: PostalAddress,
}

/// Use-case port for creating, relocating and deleting locations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationCommand: Send + Sync {
    /// Geocode and persist a new location.
    async fn create(&self, request: CreateLocationRequest) -> Result<Location, Error>;

    /// Replace the postal fields of an existing location, re-geocoding them.
    ///
    /// The caller has already read `current`; the store is not queried again.
    /// A record removed since that read is reported as not found.
    async fn update(&self, request: UpdateLocationRequest) -> Result<Location, Error>;

    /// Remove a location.
    async fn delete(&self, id: &LocationId) -> Result<(), Error>;
}
