//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the location and health endpoints together with the
//! request, response and error schemas. Swagger UI serves it in debug builds.

use crate::inbound::http::health::ProbeStatus;
use crate::inbound::http::locations::{
    CoordinateBody, CreateLocationBody, LocationResponse, UpdateLocationBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Geolocations API",
        description = "Store named postal addresses enriched with geocoded coordinates."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::locations::get_location,
        crate::inbound::http::locations::create_location,
        crate::inbound::http::locations::update_location,
        crate::inbound::http::locations::delete_location,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        LocationResponse,
        CoordinateBody,
        CreateLocationBody,
        UpdateLocationBody,
        ProbeStatus,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "locations", description = "Geocoded location records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
