//! DTOs for decoding geocoding JSON responses.
//!
//! Only the fields the service needs are modelled; everything else in the
//! provider payload (address components, viewport, place ids) is ignored.

use serde::Deserialize;

use crate::domain::Coordinate;
use crate::domain::ports::GeocoderError;

/// Status value the provider uses for a successful lookup.
const STATUS_OK: &str = "OK";

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeResponseDto {
    pub(super) status: String,
    #[serde(default)]
    pub(super) results: Vec<GeocodeResultDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeResultDto {
    pub(super) geometry: GeometryDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeometryDto {
    pub(super) location: LatLongDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct LatLongDto {
    #[serde(alias = "lng")]
    pub(super) long: f64,
    pub(super) lat: f64,
}

impl GeocodeResponseDto {
    /// Select the first (best-ranked) result.
    pub(super) fn into_best_match(self, query: &str) -> Result<Coordinate, GeocoderError> {
        if self.status != STATUS_OK {
            return Err(GeocoderError::status(self.status));
        }
        self.results
            .into_iter()
            .next()
            .map(|result| {
                let LatLongDto { long, lat } = result.geometry.location;
                Coordinate::new(long, lat)
            })
            .ok_or_else(|| GeocoderError::no_match(query))
    }
}
