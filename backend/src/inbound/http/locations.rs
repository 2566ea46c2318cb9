//! Location HTTP handlers.
//!
//! ```text
//! GET    /locations/{id}
//! POST   /locations
//! PUT    /locations/{id}
//! DELETE /locations/{id}
//! ```
//!
//! Bodies are taken as raw bytes and decoded after the identifier has been
//! checked, so an unknown or malformed identifier answers 404 even when the
//! body is also invalid.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CreateLocationRequest, UpdateLocationRequest};
use crate::domain::{Coordinate, Location, PostalAddress};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{decode_json_body, parse_location_id};

/// Request payload for creating a location.
///
/// Any `id` or `coordinate` supplied by the client is ignored.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateLocationBody {
    #[schema(example = "Cafe")]
    pub name: String,
    #[schema(example = "1 Main St")]
    pub address: String,
    #[schema(example = "Springfield")]
    pub city: String,
    #[schema(example = "IL")]
    pub state: String,
    #[schema(example = 62701)]
    pub zip: u32,
}

impl From<CreateLocationBody> for CreateLocationRequest {
    fn from(value: CreateLocationBody) -> Self {
        Self {
            name: value.name,
            postal: PostalAddress {
                address: value.address,
                city: value.city,
                state: value.state,
                zip: value.zip,
            },
        }
    }
}

/// Request payload for relocating a location. A `name` field is ignored.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateLocationBody {
    #[schema(example = "2 Main St")]
    pub address: String,
    #[schema(example = "Springfield")]
    pub city: String,
    #[schema(example = "IL")]
    pub state: String,
    #[schema(example = 62702)]
    pub zip: u32,
}

impl From<UpdateLocationBody> for PostalAddress {
    fn from(value: UpdateLocationBody) -> Self {
        Self {
            address: value.address,
            city: value.city,
            state: value.state,
            zip: value.zip,
        }
    }
}

/// Geocoded position of a location.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct CoordinateBody {
    pub long: f64,
    pub lat: f64,
}

impl From<Coordinate> for CoordinateBody {
    fn from(value: Coordinate) -> Self {
        Self {
            long: value.long,
            lat: value.lat,
        }
    }
}

/// Response payload for a stored location.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct LocationResponse {
    #[schema(example = "5f2b8c1e9d3a4b5c6d7e8f90")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: u32,
    pub coordinate: CoordinateBody,
}

impl From<Location> for LocationResponse {
    fn from(value: Location) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            address: value.postal.address,
            city: value.postal.city,
            state: value.postal.state,
            zip: value.postal.zip,
            coordinate: value.coordinate.into(),
        }
    }
}

/// Fetch a location by identifier.
#[utoipa::path(
    get,
    path = "/locations/{id}",
    params(("id" = String, Path, description = "24 character hexadecimal identifier")),
    responses(
        (status = 200, description = "Stored location", body = LocationResponse),
        (status = 404, description = "Malformed or unknown identifier", body = ErrorSchema),
        (status = 503, description = "Location store unavailable", body = ErrorSchema)
    ),
    tags = ["locations"],
    operation_id = "getLocation"
)]
#[get("/locations/{id}")]
pub async fn get_location(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<LocationResponse>> {
    let id = parse_location_id(&path)?;
    let location = state.locations_query.get(&id).await?;
    Ok(web::Json(LocationResponse::from(location)))
}

/// Geocode and store a new location.
#[utoipa::path(
    post,
    path = "/locations",
    request_body = CreateLocationBody,
    responses(
        (status = 201, description = "Stored location", body = LocationResponse),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 502, description = "Coordinates unavailable", body = ErrorSchema),
        (status = 503, description = "Location store unavailable", body = ErrorSchema)
    ),
    tags = ["locations"],
    operation_id = "createLocation"
)]
#[post("/locations")]
pub async fn create_location(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let payload: CreateLocationBody = decode_json_body(&body)?;
    let location = state.locations.create(payload.into()).await?;
    Ok(HttpResponse::Created().json(LocationResponse::from(location)))
}

/// Replace a location's address and recompute its coordinate.
#[utoipa::path(
    put,
    path = "/locations/{id}",
    params(("id" = String, Path, description = "24 character hexadecimal identifier")),
    request_body = UpdateLocationBody,
    responses(
        (status = 201, description = "Relocated location; name unchanged", body = LocationResponse),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 404, description = "Malformed or unknown identifier", body = ErrorSchema),
        (status = 502, description = "Coordinates unavailable", body = ErrorSchema),
        (status = 503, description = "Location store unavailable", body = ErrorSchema)
    ),
    tags = ["locations"],
    operation_id = "updateLocation"
)]
#[put("/locations/{id}")]
pub async fn update_location(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let id = parse_location_id(&path)?;
    let current = state.locations_query.get(&id).await?;
    let payload: UpdateLocationBody = decode_json_body(&body)?;

    let location = state
        .locations
        .update(UpdateLocationRequest {
            current,
            postal: payload.into(),
        })
        .await?;
    Ok(HttpResponse::Created().json(LocationResponse::from(location)))
}

/// Remove a location.
#[utoipa::path(
    delete,
    path = "/locations/{id}",
    params(("id" = String, Path, description = "24 character hexadecimal identifier")),
    responses(
        (status = 200, description = "Location removed"),
        (status = 404, description = "Malformed or unknown identifier", body = ErrorSchema),
        (status = 503, description = "Location store unavailable", body = ErrorSchema)
    ),
    tags = ["locations"],
    operation_id = "deleteLocation"
)]
#[delete("/locations/{id}")]
pub async fn delete_location(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_location_id(&path)?;
    state.locations.delete(&id).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
#[path = "locations_tests.rs"]
mod tests;
