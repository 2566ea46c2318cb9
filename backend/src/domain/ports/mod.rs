//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod geocoder;
mod location_command;
mod location_query;
mod location_repository;

#[cfg(test)]
pub use geocoder::MockGeocoder;
pub use geocoder::{FixtureGeocoder, Geocoder, GeocoderError};
#[cfg(test)]
pub use location_command::MockLocationCommand;
pub use location_command::{CreateLocationRequest, LocationCommand, UpdateLocationRequest};
#[cfg(test)]
pub use location_query::MockLocationQuery;
pub use location_query::LocationQuery;
#[cfg(test)]
pub use location_repository::MockLocationRepository;
pub use location_repository::{LocationRepository, LocationRepositoryError};
