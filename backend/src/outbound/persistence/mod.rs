//! Location record stores.
//!
//! [`MongoLocationRepository`] is the production adapter. Documents are an
//! internal representation (`models.rs`) and never leak into the domain.
//! [`InMemoryLocationRepository`] backs servers assembled without a
//! database, such as tests and local development.
//!
//! # Example
//!
//! ```ignore
//! use geolocations::outbound::persistence::{MongoLocationRepository, StoreSettings};
//!
//! let settings = StoreSettings::new("mongodb://localhost:27017", "locations", "locations");
//! let repository = MongoLocationRepository::connect(&settings).await?;
//! ```

mod memory;
mod models;
mod mongo_location_repository;

pub use memory::InMemoryLocationRepository;
pub use mongo_location_repository::{MongoLocationRepository, StoreSettings};
