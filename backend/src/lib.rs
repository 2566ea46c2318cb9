//! Geolocations service library.
//!
//! Stores named postal addresses in a document store and enriches each one
//! with coordinates from a geocoding API. Layout follows a hexagonal split:
//! [`domain`] owns the model and use-cases, [`inbound`] adapts HTTP onto
//! them, and [`outbound`] implements the store and geocoder ports.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
