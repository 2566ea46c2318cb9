//! Shared validation helpers for inbound HTTP adapters.
//!
//! Identifier checks run before any body decoding or store access, and a
//! malformed identifier is indistinguishable from an unknown one.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, LocationId};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MalformedBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MalformedBody => "malformed_body",
        }
    }
}

/// Parse a path identifier, mapping malformed input to `not_found`.
pub(crate) fn parse_location_id(raw: &str) -> Result<LocationId, Error> {
    LocationId::new(raw).map_err(|error| {
        debug!(%error, id = raw, "rejecting malformed location id");
        Error::not_found(format!("location {raw} not found"))
    })
}

pub(crate) fn malformed_body_error(reason: impl Display) -> Error {
    Error::invalid_request("request body could not be decoded").with_details(json!({
        "code": ErrorCode::MalformedBody.as_str(),
        "reason": reason.to_string(),
    }))
}

/// Decode a JSON request body, reporting failures as `invalid_request`.
pub(crate) fn decode_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(malformed_body_error)
}
