//! Driven port resolving postal addresses to coordinates.
//!
//! The domain owns the request and result shapes so the location service
//! stays independent of the concrete geocoding provider.

use async_trait::async_trait;

use crate::domain::{Coordinate, PostalAddress};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while calling the geocoding service.
    pub enum GeocoderError {
        /// The request failed before a response arrived.
        Transport { message: String } =>
            "geocoder transport failed: {message}",
        /// The request exceeded its timeout.
        Timeout { message: String } =>
            "geocoder timed out: {message}",
        /// The service answered with a failure status; no coordinates available.
        Status { status: String } =>
            "geocoder returned status {status}",
        /// The service answered OK without any result entries.
        NoMatch { query: String } =>
            "geocoder found no match for {query}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "geocoder response decode failed: {message}",
    }
}

/// Port for resolving an address to a coordinate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve the best-matching coordinate for `postal`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use geolocations::domain::ports::{FixtureGeocoder, Geocoder};
    ///
    /// let coordinate = FixtureGeocoder::default().geocode(&postal).await?;
    /// ```
    async fn geocode(&self, postal: &PostalAddress) -> Result<Coordinate, GeocoderError>;
}

/// Fixture implementation returning one fixed coordinate for every address.
#[derive(Debug, Clone, Copy)]
pub struct FixtureGeocoder {
    coordinate: Coordinate,
}

impl FixtureGeocoder {
    /// Build a fixture answering with `coordinate`.
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

impl Default for FixtureGeocoder {
    fn default() -> Self {
        // Springfield, IL.
        Self::new(Coordinate::new(-89.650_148, 39.781_721))
    }
}

#[async_trait]
impl Geocoder for FixtureGeocoder {
    async fn geocode(&self, _postal: &PostalAddress) -> Result<Coordinate, GeocoderError> {
        Ok(self.coordinate)
    }
}
