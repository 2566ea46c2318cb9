//! Builders for HTTP state from the server configuration.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use geolocations::domain::LocationService;
use geolocations::domain::ports::LocationRepository;
use geolocations::inbound::http::state::HttpState;
use geolocations::outbound::persistence::InMemoryLocationRepository;

use super::ServerConfig;

fn select_repository(config: &ServerConfig) -> Arc<dyn LocationRepository> {
    match &config.repository {
        Some(repository) => Arc::clone(repository),
        None => {
            warn!("no location store configured; records are kept in memory");
            Arc::new(InMemoryLocationRepository::new())
        }
    }
}

/// Wire the location service into handler state.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = Arc::new(LocationService::new(
        select_repository(config),
        Arc::clone(&config.geocoder),
    ));
    web::Data::new(HttpState::new(service.clone(), service))
}
