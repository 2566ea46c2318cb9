//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod locations;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;

/// Register the location and health routes.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>` as app
/// data.
///
/// # Examples
/// ```no_run
/// use actix_web::{App, web};
/// use geolocations::inbound::http::{configure, health::HealthState};
///
/// let app = App::new()
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(locations::get_location)
        .service(locations::create_location)
        .service(locations::update_location)
        .service(locations::delete_location)
        .service(health::ready)
        .service(health::live);
}
