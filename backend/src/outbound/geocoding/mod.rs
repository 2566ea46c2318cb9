//! Geocoding outbound adapters.
//!
//! This module provides the reqwest implementation of the `Geocoder` port.

mod dto;
mod http_geocoder;

pub use http_geocoder::HttpGeocoder;
