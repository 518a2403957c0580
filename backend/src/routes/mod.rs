//! Route definitions for the Hawaii Climate API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Routes advertised on the index page
pub const AVAILABLE_ROUTES: [&str; 5] = [
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/<start>",
    "/api/v1.0/<start>/<end>",
];

/// Create API routes
///
/// Static segments take precedence over `:start`, so `/precipitation` never
/// reaches the summary handler.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/precipitation", get(handlers::get_precipitation))
        .route("/stations", get(handlers::list_stations))
        .route("/tobs", get(handlers::get_tobs))
        .route("/:start", get(handlers::summarize_from))
        .route("/:start/:end", get(handlers::summarize_between))
}
