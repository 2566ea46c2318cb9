//! Driving port for reading locations.

use async_trait::async_trait;

use crate::domain::{Error, Location, LocationId};

/// Use-case port for fetching one location.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationQuery: Send + Sync {
    /// Fetch a location, failing with `NotFound` when it does not exist.
    async fn get(&self, id: &LocationId) -> Result<Location, Error>;
}
