//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use geolocations::domain::ports::{Geocoder, LocationRepository};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) geocoder: Arc<dyn Geocoder>,
    pub(crate) repository: Option<Arc<dyn LocationRepository>>,
}

impl ServerConfig {
    /// Construct a configuration listening on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            bind_addr,
            geocoder,
            repository: None,
        }
    }

    /// Attach the location store.
    ///
    /// Without one the server keeps records in process memory.
    #[must_use]
    pub fn with_repository(mut self, repository: Arc<dyn LocationRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
