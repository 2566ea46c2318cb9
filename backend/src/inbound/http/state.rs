//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LocationCommand, LocationQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub locations: Arc<dyn LocationCommand>,
    pub locations_query: Arc<dyn LocationQuery>,
}

impl HttpState {
    /// Construct state from the location driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use geolocations::domain::LocationService;
    /// use geolocations::domain::ports::FixtureGeocoder;
    /// use geolocations::inbound::http::state::HttpState;
    /// use geolocations::outbound::persistence::InMemoryLocationRepository;
    ///
    /// let service = Arc::new(LocationService::new(
    ///     Arc::new(InMemoryLocationRepository::new()),
    ///     Arc::new(FixtureGeocoder::default()),
    /// ));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.locations_query.clone();
    /// ```
    pub fn new(
        locations: Arc<dyn LocationCommand>,
        locations_query: Arc<dyn LocationQuery>,
    ) -> Self {
        Self {
            locations,
            locations_query,
        }
    }
}
