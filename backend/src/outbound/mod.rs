//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **geocoding**: HTTP client for the address geocoding API
//! - **persistence**: MongoDB-backed and in-memory location stores
//!
//! Adapters are thin translators between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod geocoding;
pub mod persistence;
