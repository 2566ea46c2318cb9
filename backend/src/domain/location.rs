//! Location records and their value types.
//!
//! A [`Location`] is the persisted aggregate; [`NewLocation`] is what the
//! store receives before it has assigned an identifier. Coordinates are
//! always derived by the geocoder and never taken from clients.

use std::fmt;

/// Length of the hexadecimal identifier form issued by the document store.
pub const LOCATION_ID_LEN: usize = 24;

/// Validation errors returned by [`LocationId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationIdError {
    /// The identifier does not have exactly [`LOCATION_ID_LEN`] characters.
    InvalidLength { actual: usize },
    /// The identifier contains a non-hexadecimal character.
    NonHexCharacter,
}

impl fmt::Display for LocationIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { actual } => write!(
                f,
                "location id must be {LOCATION_ID_LEN} characters, got {actual}"
            ),
            Self::NonHexCharacter => write!(f, "location id must be hexadecimal"),
        }
    }
}

impl std::error::Error for LocationIdError {}

/// Opaque store-generated identifier, held in lowercase hexadecimal form.
///
/// # Examples
/// ```
/// use geolocations::domain::LocationId;
///
/// let id = LocationId::new("5F2B8C1E9D3A4B5C6D7E8F90").expect("valid id");
/// assert_eq!(id.as_str(), "5f2b8c1e9d3a4b5c6d7e8f90");
/// assert!(LocationId::new("42").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationId(String);

impl LocationId {
    /// Validate and normalise an identifier.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, LocationIdError> {
        let raw = raw.as_ref();
        if raw.len() != LOCATION_ID_LEN {
            return Err(LocationIdError::InvalidLength { actual: raw.len() });
        }
        if !raw.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(LocationIdError::NonHexCharacter);
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    /// Borrow the normalised hexadecimal form.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for LocationId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    /// Longitude, east positive.
    pub long: f64,
    /// Latitude, north positive.
    pub lat: f64,
}

impl Coordinate {
    /// Build a coordinate from longitude then latitude.
    pub fn new(long: f64, lat: f64) -> Self {
        Self { long, lat }
    }
}

/// The replaceable postal part of a record; also the geocoder's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalAddress {
    /// Street address, e.g. `1 Main St`.
    pub address: String,
    pub city: String,
    /// State or region code, e.g. `IL`.
    pub state: String,
    /// Numeric postal code.
    pub zip: u32,
}

/// A record awaiting insertion; the store assigns its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    /// Display name; never changed after creation.
    pub name: String,
    pub postal: PostalAddress,
    /// Geocoded from `postal`.
    pub coordinate: Coordinate,
}

/// A persisted location record.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Store-issued identifier.
    pub id: LocationId,
    /// Display name; updates keep it.
    pub name: String,
    pub postal: PostalAddress,
    /// Geocoded from `postal`.
    pub coordinate: Coordinate,
}

impl Location {
    /// Attach a store-issued identifier to a pending record.
    pub fn from_new(id: LocationId, new: NewLocation) -> Self {
        let NewLocation {
            name,
            postal,
            coordinate,
        } = new;
        Self {
            id,
            name,
            postal,
            coordinate,
        }
    }

    /// Replace the postal fields and coordinate, keeping identity and name.
    #[must_use]
    pub fn relocated(self, postal: PostalAddress, coordinate: Coordinate) -> Self {
        Self {
            postal,
            coordinate,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::too_short("abc", LocationIdError::InvalidLength { actual: 3 })]
    #[case::too_long(
        "5f2b8c1e9d3a4b5c6d7e8f901",
        LocationIdError::InvalidLength { actual: 25 }
    )]
    #[case::empty("", LocationIdError::InvalidLength { actual: 0 })]
    #[case::non_hex("5f2b8c1e9d3a4b5c6d7e8fzz", LocationIdError::NonHexCharacter)]
    fn rejects_malformed_identifiers(#[case] raw: &str, #[case] expected: LocationIdError) {
        assert_eq!(LocationId::new(raw), Err(expected));
    }

    #[test]
    fn rejects_multibyte_input_of_matching_byte_length() {
        // 22 ASCII bytes plus one two-byte character.
        let raw = "5f2b8c1e9d3a4b5c6d7e8fé";
        assert_eq!(raw.len(), LOCATION_ID_LEN);
        assert_eq!(LocationId::new(raw), Err(LocationIdError::NonHexCharacter));
    }

    #[test]
    fn relocated_keeps_identity_and_name() {
        let original = Location {
            id: LocationId::new("000000000000000000000001").expect("valid id"),
            name: "Cafe".to_owned(),
            postal: PostalAddress {
                address: "1 Main St".to_owned(),
                city: "Springfield".to_owned(),
                state: "IL".to_owned(),
                zip: 62701,
            },
            coordinate: Coordinate::new(-89.65, 39.78),
        };
        let moved = original.clone().relocated(
            PostalAddress {
                address: "2 Main St".to_owned(),
                city: "Springfield".to_owned(),
                state: "IL".to_owned(),
                zip: 62702,
            },
            Coordinate::new(-89.66, 39.79),
        );

        assert_eq!(moved.id, original.id);
        assert_eq!(moved.name, "Cafe");
        assert_eq!(moved.postal.zip, 62702);
        assert_eq!(moved.coordinate, Coordinate::new(-89.66, 39.79));
    }
}
