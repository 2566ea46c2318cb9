//! MongoDB document shapes for location records.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::ports::LocationRepositoryError;
use crate::domain::{Coordinate, Location, LocationId, NewLocation, PostalAddress};

/// Stored form of a location record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) struct LocationDocument {
    #[serde(rename = "_id")]
    pub(super) id: ObjectId,
    pub(super) name: String,
    pub(super) address: String,
    pub(super) city: String,
    pub(super) state: String,
    pub(super) zip: i64,
    pub(super) coordinate: CoordinateDocument,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(super) struct CoordinateDocument {
    pub(super) long: f64,
    pub(super) lat: f64,
}

impl From<Coordinate> for CoordinateDocument {
    fn from(value: Coordinate) -> Self {
        Self {
            long: value.long,
            lat: value.lat,
        }
    }
}

impl LocationDocument {
    pub(super) fn from_new(id: ObjectId, new: &NewLocation) -> Self {
        Self {
            id,
            name: new.name.clone(),
            address: new.postal.address.clone(),
            city: new.postal.city.clone(),
            state: new.postal.state.clone(),
            zip: i64::from(new.postal.zip),
            coordinate: new.coordinate.into(),
        }
    }

    /// Convert into the domain record, rejecting out-of-range zip codes.
    pub(super) fn into_domain(self) -> Result<Location, LocationRepositoryError> {
        let id = LocationId::new(self.id.to_hex())
            .map_err(|error| LocationRepositoryError::query(error.to_string()))?;
        let zip = u32::try_from(self.zip).map_err(|_| {
            LocationRepositoryError::query(format!(
                "stored zip {} for {id} is out of range",
                self.zip
            ))
        })?;
        Ok(Location {
            id,
            name: self.name,
            postal: PostalAddress {
                address: self.address,
                city: self.city,
                state: self.state,
                zip,
            },
            coordinate: Coordinate::new(self.coordinate.long, self.coordinate.lat),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    fn new_location() -> NewLocation {
        NewLocation {
            name: "Cafe".to_owned(),
            postal: PostalAddress {
                address: "1 Main St".to_owned(),
                city: "Springfield".to_owned(),
                state: "IL".to_owned(),
                zip: 62701,
            },
            coordinate: Coordinate::new(-89.65, 39.78),
        }
    }

    #[test]
    fn document_serialises_with_object_id_key() {
        let id = ObjectId::parse_str("5f2b8c1e9d3a4b5c6d7e8f90").expect("valid object id");
        let document = LocationDocument::from_new(id, &new_location());

        let encoded = bson::to_document(&document).expect("encodes");

        assert_eq!(
            encoded,
            doc! {
                "_id": id,
                "name": "Cafe",
                "address": "1 Main St",
                "city": "Springfield",
                "state": "IL",
                "zip": 62701_i64,
                "coordinate": { "long": -89.65, "lat": 39.78 },
            }
        );
    }

    #[test]
    fn converts_into_domain_record() {
        let id = ObjectId::parse_str("5F2B8C1E9D3A4B5C6D7E8F90").expect("valid object id");
        let location = LocationDocument::from_new(id, &new_location())
            .into_domain()
            .expect("converts");

        assert_eq!(location.id.as_str(), "5f2b8c1e9d3a4b5c6d7e8f90");
        assert_eq!(location.postal, new_location().postal);
        assert_eq!(location.coordinate, Coordinate::new(-89.65, 39.78));
    }

    #[test]
    fn rejects_negative_zip() {
        let mut document = LocationDocument::from_new(ObjectId::new(), &new_location());
        document.zip = -1;

        let error = document.into_domain().expect_err("negative zip");
        assert!(matches!(error, LocationRepositoryError::Query { .. }));
    }
}
