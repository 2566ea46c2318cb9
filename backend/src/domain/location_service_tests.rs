//! Tests for the location service.

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockGeocoder, MockLocationRepository};
use rstest::{fixture, rstest};

const ID: &str = "5f2b8c1e9d3a4b5c6d7e8f90";

fn make_service(
    repo: MockLocationRepository,
    geocoder: MockGeocoder,
) -> LocationService<MockLocationRepository, MockGeocoder> {
    LocationService::new(Arc::new(repo), Arc::new(geocoder))
}

fn id() -> LocationId {
    LocationId::new(ID).expect("valid id")
}

#[fixture]
fn springfield() -> PostalAddress {
    PostalAddress {
        address: "1 Main St".to_owned(),
        city: "Springfield".to_owned(),
        state: "IL".to_owned(),
        zip: 62701,
    }
}

#[fixture]
fn stored(springfield: PostalAddress) -> Location {
    Location {
        id: id(),
        name: "Cafe".to_owned(),
        postal: springfield,
        coordinate: Coordinate::new(-89.65, 39.78),
    }
}

fn geocoder_returning(coordinate: Coordinate) -> MockGeocoder {
    let mut geocoder = MockGeocoder::new();
    geocoder
        .expect_geocode()
        .times(1)
        .return_once(move |_| Ok(coordinate));
    geocoder
}

#[rstest]
#[tokio::test]
async fn create_persists_geocoded_coordinate(springfield: PostalAddress) {
    let coordinate = Coordinate::new(-89.6501, 39.7817);
    let mut repo = MockLocationRepository::new();
    repo.expect_insert()
        .withf(move |new| new.name == "Cafe" && new.coordinate == coordinate)
        .times(1)
        .return_once(|new| Ok(Location::from_new(id(), new.clone())));

    let service = make_service(repo, geocoder_returning(coordinate));
    let location = service
        .create(CreateLocationRequest {
            name: "Cafe".to_owned(),
            postal: springfield.clone(),
        })
        .await
        .expect("create succeeds");

    assert_eq!(location.id, id());
    assert_eq!(location.postal, springfield);
    assert_eq!(location.coordinate, coordinate);
}

#[rstest]
#[case::status(GeocoderError::status("ZERO_RESULTS"))]
#[case::no_match(GeocoderError::no_match("1 Main St"))]
#[case::decode(GeocoderError::decode("expected value"))]
#[case::timeout(GeocoderError::timeout("5s elapsed"))]
#[tokio::test]
async fn create_surfaces_geocoder_failures_without_persisting(
    #[case] failure: GeocoderError,
    springfield: PostalAddress,
) {
    let mut geocoder = MockGeocoder::new();
    geocoder
        .expect_geocode()
        .times(1)
        .return_once(move |_| Err(failure));
    let mut repo = MockLocationRepository::new();
    repo.expect_insert().times(0);

    let service = make_service(repo, geocoder);
    let error = service
        .create(CreateLocationRequest {
            name: "Cafe".to_owned(),
            postal: springfield,
        })
        .await
        .expect_err("geocoding failure");

    assert_eq!(error.code(), ErrorCode::UpstreamUnavailable);
}

#[rstest]
#[tokio::test]
async fn update_preserves_stored_name(stored: Location) {
    let moved_to = PostalAddress {
        address: "2 Main St".to_owned(),
        city: "Springfield".to_owned(),
        state: "IL".to_owned(),
        zip: 62702,
    };
    let coordinate = Coordinate::new(-89.66, 39.79);
    let mut repo = MockLocationRepository::new();
    let expected_postal = moved_to.clone();
    repo.expect_update_address()
        .withf(move |target, postal, coord| {
            target.as_str() == ID && *postal == expected_postal && *coord == coordinate
        })
        .times(1)
        .return_once(|_, _, _| Ok(()));

    let service = make_service(repo, geocoder_returning(coordinate));
    let location = service
        .update(UpdateLocationRequest {
            current: stored,
            postal: moved_to.clone(),
        })
        .await
        .expect("update succeeds");

    assert_eq!(location.id, id());
    assert_eq!(location.name, "Cafe");
    assert_eq!(location.postal, moved_to);
    assert_eq!(location.coordinate, coordinate);
}

#[rstest]
#[tokio::test]
async fn update_writes_without_rereading_the_record(
    stored: Location,
    springfield: PostalAddress,
) {
    let mut repo = MockLocationRepository::new();
    repo.expect_find_by_id().times(0);
    repo.expect_update_address()
        .times(1)
        .return_once(|_, _, _| Ok(()));

    let service = make_service(repo, geocoder_returning(Coordinate::default()));
    service
        .update(UpdateLocationRequest {
            current: stored,
            postal: springfield,
        })
        .await
        .expect("update succeeds");
}

#[rstest]
#[tokio::test]
async fn update_surfaces_geocoder_failures_without_writing(
    stored: Location,
    springfield: PostalAddress,
) {
    let mut geocoder = MockGeocoder::new();
    geocoder
        .expect_geocode()
        .times(1)
        .return_once(|_| Err(GeocoderError::status("OVER_QUERY_LIMIT")));
    let mut repo = MockLocationRepository::new();
    repo.expect_update_address().times(0);

    let service = make_service(repo, geocoder);
    let error = service
        .update(UpdateLocationRequest {
            current: stored,
            postal: springfield,
        })
        .await
        .expect_err("geocoding failure");

    assert_eq!(error.code(), ErrorCode::UpstreamUnavailable);
}

#[rstest]
#[tokio::test]
async fn update_reports_record_removed_since_it_was_read(
    stored: Location,
    springfield: PostalAddress,
) {
    let mut repo = MockLocationRepository::new();
    repo.expect_update_address()
        .times(1)
        .return_once(|id, _, _| Err(LocationRepositoryError::not_found(id.to_string())));

    let service = make_service(repo, geocoder_returning(Coordinate::default()));
    let error = service
        .update(UpdateLocationRequest {
            current: stored,
            postal: springfield,
        })
        .await
        .expect_err("record vanished");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn get_returns_stored_location(stored: Location) {
    let expected = stored.clone();
    let mut repo = MockLocationRepository::new();
    repo.expect_find_by_id()
        .withf(|target| target.as_str() == ID)
        .times(1)
        .return_once(move |_| Ok(Some(stored)));

    let service = make_service(repo, MockGeocoder::new());
    let location = service.get(&id()).await.expect("get succeeds");

    assert_eq!(location, expected);
}

#[tokio::test]
async fn get_reports_missing_location() {
    let mut repo = MockLocationRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let service = make_service(repo, MockGeocoder::new());
    let error = service.get(&id()).await.expect_err("missing location");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[case::missing(LocationRepositoryError::not_found(ID), ErrorCode::NotFound)]
#[case::connection(
    LocationRepositoryError::connection("no primary"),
    ErrorCode::ServiceUnavailable
)]
#[case::timeout(LocationRepositoryError::timeout("5s"), ErrorCode::ServiceUnavailable)]
#[case::query(LocationRepositoryError::query("bad filter"), ErrorCode::InternalError)]
#[tokio::test]
async fn delete_maps_repository_errors(
    #[case] failure: LocationRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockLocationRepository::new();
    repo.expect_delete()
        .times(1)
        .return_once(move |_| Err(failure));

    let service = make_service(repo, MockGeocoder::new());
    let error = service.delete(&id()).await.expect_err("delete fails");

    assert_eq!(error.code(), expected);
}

#[tokio::test]
async fn delete_succeeds_when_record_removed() {
    let mut repo = MockLocationRepository::new();
    repo.expect_delete().times(1).return_once(|_| Ok(()));

    let service = make_service(repo, MockGeocoder::new());
    service.delete(&id()).await.expect("delete succeeds");
}
