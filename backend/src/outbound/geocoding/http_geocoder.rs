//! Reqwest-backed geocoder adapter.
//!
//! This adapter owns transport details only: query construction, timeout
//! and HTTP error mapping, and JSON decoding into a domain coordinate.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::GeocodeResponseDto;
use crate::domain::ports::{Geocoder, GeocoderError};
use crate::domain::{Coordinate, PostalAddress};

const DEFAULT_USER_AGENT: &str = concat!("geolocations/", env!("CARGO_PKG_VERSION"));

/// Geocoder adapter issuing GET requests against one endpoint.
pub struct HttpGeocoder {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl HttpGeocoder {
    /// Build an adapter whose requests are bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: None,
        })
    }

    /// Send `key=<api_key>` with every request.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[async_trait]
impl Geocoder for HttpGeocoder {
    async fn geocode(&self, postal: &PostalAddress) -> Result<Coordinate, GeocoderError> {
        let query = address_query(postal);
        let url = build_request_url(&self.endpoint, &query, self.api_key.as_deref());
        debug!(%query, "requesting geocode");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status));
        }

        parse_coordinate(body.as_ref(), &query)
    }
}

/// Join street, city and state with single spaces, skipping blanks.
///
/// Form encoding later turns each space into `+`.
fn address_query(postal: &PostalAddress) -> String {
    [&postal.address, &postal.city, &postal.state]
        .into_iter()
        .flat_map(|part| part.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_request_url(endpoint: &Url, query: &str, api_key: Option<&str>) -> Url {
    let mut url = endpoint.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("address", query);
        pairs.append_pair("sensor", "false");
        if let Some(key) = api_key {
            pairs.append_pair("key", key);
        }
    }
    url
}

fn parse_coordinate(body: &[u8], query: &str) -> Result<Coordinate, GeocoderError> {
    let decoded: GeocodeResponseDto = serde_json::from_slice(body).map_err(|error| {
        GeocoderError::decode(format!("invalid geocoding JSON payload: {error}"))
    })?;
    decoded.into_best_match(query)
}

fn map_transport_error(error: reqwest::Error) -> GeocoderError {
    if error.is_timeout() {
        GeocoderError::timeout(error.to_string())
    } else {
        GeocoderError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode) -> GeocoderError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            GeocoderError::timeout(format!("HTTP {}", status.as_u16()))
        }
        _ => GeocoderError::status(format!("HTTP {}", status.as_u16())),
    }
}
