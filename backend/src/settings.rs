//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `LOCATIONS_*` environment variables, command-line flags
//! or a configuration file. The timeouts carry loader defaults; the other
//! fields are optional and their accessors apply the defaults below.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::persistence::StoreSettings;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "locations";
const DEFAULT_COLLECTION: &str = "locations";
const DEFAULT_GEOCODER_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Runtime settings for the location service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LOCATIONS")]
pub struct AppSettings {
    /// Socket address the HTTP server listens on.
    pub bind_addr: Option<String>,
    /// MongoDB connection string.
    pub mongodb_uri: Option<String>,
    /// Database holding the location collection.
    pub database: Option<String>,
    /// Collection storing location documents.
    pub collection: Option<String>,
    /// Upper bound for connecting and for each store operation.
    #[ortho_config(default = 5_000)]
    pub store_timeout_ms: u64,
    /// Geocoding API endpoint receiving `address` queries.
    pub geocoder_endpoint: Option<String>,
    /// API key appended to geocoding requests when set.
    pub geocoder_api_key: Option<String>,
    /// Upper bound for each geocoding request.
    #[ortho_config(default = 5_000)]
    pub geocoder_timeout_ms: u64,
}

impl AppSettings {
    /// Return the listen address, falling back to the loopback default.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured value is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Return the store connection settings.
    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings::new(
            self.mongodb_uri.as_deref().unwrap_or(DEFAULT_MONGODB_URI),
            self.database.as_deref().unwrap_or(DEFAULT_DATABASE),
            self.collection.as_deref().unwrap_or(DEFAULT_COLLECTION),
        )
        .with_timeout(Duration::from_millis(self.store_timeout_ms))
    }

    /// Return the geocoding endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured value is not an absolute URL.
    pub fn geocoder_endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(
            self.geocoder_endpoint
                .as_deref()
                .unwrap_or(DEFAULT_GEOCODER_ENDPOINT),
        )
    }

    pub fn geocoder_api_key(&self) -> Option<&str> {
        self.geocoder_api_key.as_deref()
    }

    pub fn geocoder_timeout(&self) -> Duration {
        Duration::from_millis(self.geocoder_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing and defaults.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 8] = [
        "LOCATIONS_BIND_ADDR",
        "LOCATIONS_MONGODB_URI",
        "LOCATIONS_DATABASE",
        "LOCATIONS_COLLECTION",
        "LOCATIONS_STORE_TIMEOUT_MS",
        "LOCATIONS_GEOCODER_ENDPOINT",
        "LOCATIONS_GEOCODER_API_KEY",
        "LOCATIONS_GEOCODER_TIMEOUT_MS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("geolocations")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        let store = settings.store_settings();

        assert_eq!(
            settings.bind_addr().expect("default parses"),
            SocketAddr::from(([127, 0, 0, 1], 8080))
        );
        assert_eq!(store.uri(), DEFAULT_MONGODB_URI);
        assert_eq!(store.database(), "locations");
        assert_eq!(store.collection(), "locations");
        assert_eq!(store.timeout(), Duration::from_secs(5));
        assert_eq!(
            settings.geocoder_endpoint().expect("default parses").as_str(),
            DEFAULT_GEOCODER_ENDPOINT
        );
        assert_eq!(settings.geocoder_api_key(), None);
        assert_eq!(settings.geocoder_timeout(), Duration::from_secs(5));
    }

    #[rstest]
    fn single_override_keeps_remaining_defaults() {
        let _guard = lock_env(VARS.map(|name| {
            let value = (name == "LOCATIONS_DATABASE").then(|| "geo".to_owned());
            (name, value)
        }));

        let settings = load_from_empty_args();
        let store = settings.store_settings();

        assert_eq!(store.database(), "geo");
        assert_eq!(store.collection(), DEFAULT_COLLECTION);
        assert_eq!(store.timeout(), Duration::from_secs(5));
        assert_eq!(settings.geocoder_timeout(), Duration::from_secs(5));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("LOCATIONS_BIND_ADDR", Some("0.0.0.0:9000".to_owned())),
            (
                "LOCATIONS_MONGODB_URI",
                Some("mongodb://db.internal:27017".to_owned()),
            ),
            ("LOCATIONS_DATABASE", Some("geo".to_owned())),
            ("LOCATIONS_COLLECTION", Some("places".to_owned())),
            ("LOCATIONS_STORE_TIMEOUT_MS", Some("750".to_owned())),
            (
                "LOCATIONS_GEOCODER_ENDPOINT",
                Some("http://127.0.0.1:4010/geocode".to_owned()),
            ),
            ("LOCATIONS_GEOCODER_API_KEY", Some("k-123".to_owned())),
            ("LOCATIONS_GEOCODER_TIMEOUT_MS", Some("1500".to_owned())),
        ]);

        let settings = load_from_empty_args();
        let store = settings.store_settings();

        assert_eq!(
            settings.bind_addr().expect("override parses"),
            SocketAddr::from(([0, 0, 0, 0], 9000))
        );
        assert_eq!(store.uri(), "mongodb://db.internal:27017");
        assert_eq!(store.database(), "geo");
        assert_eq!(store.collection(), "places");
        assert_eq!(store.timeout(), Duration::from_millis(750));
        assert_eq!(
            settings.geocoder_endpoint().expect("override parses").as_str(),
            "http://127.0.0.1:4010/geocode"
        );
        assert_eq!(settings.geocoder_api_key(), Some("k-123"));
        assert_eq!(settings.geocoder_timeout(), Duration::from_millis(1500));
    }

    #[rstest]
    fn malformed_addresses_are_reported() {
        let _guard = lock_env([
            ("LOCATIONS_BIND_ADDR", Some("not-an-address".to_owned())),
            ("LOCATIONS_GEOCODER_ENDPOINT", Some("relative/path".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert!(settings.bind_addr().is_err());
        assert!(settings.geocoder_endpoint().is_err());
    }
}
