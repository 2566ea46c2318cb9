//! MongoDB-backed `LocationRepository` implementation.
//!
//! Every driver call is bounded by the configured store timeout so a stalled
//! server surfaces as `LocationRepositoryError::Timeout` rather than hanging
//! the request.

use std::future::IntoFuture;
use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tracing::{debug, info};

use super::models::{CoordinateDocument, LocationDocument};
use crate::domain::ports::{LocationRepository, LocationRepositoryError};
use crate::domain::{Coordinate, Location, LocationId, NewLocation, PostalAddress};

const APP_NAME: &str = "geolocations";

/// Connection settings for the location store.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use geolocations::outbound::persistence::StoreSettings;
///
/// let settings = StoreSettings::new("mongodb://localhost:27017", "locations", "locations")
///     .with_timeout(Duration::from_secs(2));
/// assert_eq!(settings.timeout(), Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct StoreSettings {
    uri: String,
    database: String,
    collection: String,
    timeout: Duration,
}

impl StoreSettings {
    /// Create settings with a five second operation timeout.
    pub fn new(
        uri: impl Into<String>,
        database: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            collection: collection.into(),
            timeout: Duration::from_secs(5),
        }
    }

    /// Bound connection, server selection and every operation by `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Location store over a single MongoDB collection.
#[derive(Clone)]
pub struct MongoLocationRepository {
    collection: Collection<LocationDocument>,
    timeout: Duration,
}

impl MongoLocationRepository {
    /// Connect to the configured deployment and verify it answers a ping.
    ///
    /// # Errors
    ///
    /// Returns [`LocationRepositoryError::Connection`] when the URI is
    /// invalid or no server is reachable, and
    /// [`LocationRepositoryError::Timeout`] when the ping does not complete
    /// in time.
    pub async fn connect(settings: &StoreSettings) -> Result<Self, LocationRepositoryError> {
        let mut options = ClientOptions::parse(settings.uri())
            .await
            .map_err(|error| {
                LocationRepositoryError::connection(format!("invalid MongoDB URI: {error}"))
            })?;
        options.app_name = Some(APP_NAME.to_owned());
        options.connect_timeout = Some(settings.timeout());
        options.server_selection_timeout = Some(settings.timeout());

        let client = Client::with_options(options).map_err(map_driver_error)?;
        let database = client.database(settings.database());
        bounded(
            settings.timeout(),
            "ping",
            database.run_command(doc! { "ping": 1 }),
        )
        .await?;

        info!(
            database = settings.database(),
            collection = settings.collection(),
            "connected to location store"
        );
        Ok(Self {
            collection: database.collection(settings.collection()),
            timeout: settings.timeout(),
        })
    }
}

#[async_trait]
impl LocationRepository for MongoLocationRepository {
    async fn find_by_id(
        &self,
        id: &LocationId,
    ) -> Result<Option<Location>, LocationRepositoryError> {
        let filter = doc! { "_id": object_id(id)? };
        let found = bounded(self.timeout, "find", self.collection.find_one(filter)).await?;
        found.map(LocationDocument::into_domain).transpose()
    }

    async fn insert(&self, new: &NewLocation) -> Result<Location, LocationRepositoryError> {
        let document = LocationDocument::from_new(ObjectId::new(), new);
        bounded(self.timeout, "insert", self.collection.insert_one(&document)).await?;
        debug!(id = %document.id, "inserted location");
        document.into_domain()
    }

    async fn update_address(
        &self,
        id: &LocationId,
        postal: &PostalAddress,
        coordinate: Coordinate,
    ) -> Result<(), LocationRepositoryError> {
        let filter = doc! { "_id": object_id(id)? };
        let coordinate = CoordinateDocument::from(coordinate);
        let update = doc! {
            "$set": {
                "address": postal.address.as_str(),
                "city": postal.city.as_str(),
                "state": postal.state.as_str(),
                "zip": i64::from(postal.zip),
                "coordinate": { "long": coordinate.long, "lat": coordinate.lat },
            }
        };
        let result = bounded(
            self.timeout,
            "update",
            self.collection.update_one(filter, update),
        )
        .await?;
        if result.matched_count == 0 {
            return Err(LocationRepositoryError::not_found(id.as_str()));
        }
        Ok(())
    }

    async fn delete(&self, id: &LocationId) -> Result<(), LocationRepositoryError> {
        let filter = doc! { "_id": object_id(id)? };
        let result = bounded(self.timeout, "delete", self.collection.delete_one(filter)).await?;
        if result.deleted_count == 0 {
            return Err(LocationRepositoryError::not_found(id.as_str()));
        }
        Ok(())
    }
}

fn object_id(id: &LocationId) -> Result<ObjectId, LocationRepositoryError> {
    ObjectId::parse_str(id.as_str())
        .map_err(|error| LocationRepositoryError::query(error.to_string()))
}

/// Await a driver action, giving up after `timeout`.
async fn bounded<A, T>(
    timeout: Duration,
    operation: &'static str,
    action: A,
) -> Result<T, LocationRepositoryError>
where
    A: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(timeout, action.into_future()).await {
        Ok(result) => result.map_err(map_driver_error),
        Err(_) => Err(LocationRepositoryError::timeout(format!(
            "{operation} did not complete within {}ms",
            timeout.as_millis()
        ))),
    }
}

fn map_driver_error(error: mongodb::error::Error) -> LocationRepositoryError {
    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) | ErrorKind::DnsResolve { .. } => {
            LocationRepositoryError::connection(error.to_string())
        }
        _ => LocationRepositoryError::query(error.to_string()),
    }
}
