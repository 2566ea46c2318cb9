//! Service entry-point: loads settings, connects the store and serves HTTP.

mod server;


use std::io;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use geolocations::inbound::http::health::HealthState;
use geolocations::outbound::geocoding::HttpGeocoder;
use geolocations::outbound::persistence::MongoLocationRepository;
use geolocations::settings::AppSettings;
use server::{ServerConfig, create_server};

fn startup_error(context: &str, error: impl std::fmt::Display) -> io::Error {
    error!(%error, "{context}");
    io::Error::other(format!("{context}: {error}"))
}

fn build_geocoder(settings: &AppSettings) -> io::Result<HttpGeocoder> {
    let endpoint = settings
        .geocoder_endpoint()
        .map_err(|e| startup_error("invalid geocoder endpoint", e))?;
    let geocoder = HttpGeocoder::new(endpoint, settings.geocoder_timeout())
        .map_err(|e| startup_error("failed to build geocoding client", e))?;
    Ok(match settings.geocoder_api_key() {
        Some(key) => geocoder.with_api_key(key),
        None => geocoder,
    })
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|e| startup_error("failed to load settings", e))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| startup_error("invalid bind address", e))?;

    let repository = MongoLocationRepository::connect(&settings.store_settings())
        .await
        .map_err(|e| startup_error("failed to connect to location store", e))?;
    let geocoder = build_geocoder(&settings)?;

    let config = ServerConfig::new(bind_addr, Arc::new(geocoder))
        .with_repository(Arc::new(repository));
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
