//! Domain primitives, ports and services.
//!
//! Purpose: define the location aggregate and the use-cases operating on it
//! without depending on HTTP, MongoDB or the geocoding provider. Adapters in
//! `inbound` and `outbound` translate to and from these types.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Location, LocationId, PostalAddress, Coordinate, NewLocation: the record.
//! - LocationService: implements the location driving ports.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod location;
pub mod location_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::location::{
    Coordinate, LOCATION_ID_LEN, Location, LocationId, LocationIdError, NewLocation,
    PostalAddress,
};
pub use self::location_service::LocationService;
pub use self::trace_id::TraceId;
