//! Hawaii Climate API
//!
//! Read-only HTTP queries over a static historical weather dataset: trailing
//! year precipitation and temperature observations, station metadata, and
//! TMIN/TAVG/TMAX summaries over caller-supplied date ranges.

use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer, http::Method, response::Html, routing::get, BoxError,
    Router,
};
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod store;

pub use config::Config;
use error::AppError;
use store::ObservationStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: ObservationStore,
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    Router::new()
        .route("/", get(list_routes))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1.0", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(timeout)),
        )
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Index page listing the available routes
async fn list_routes() -> Html<String> {
    let mut body = String::from("Available Routes:<br/>");
    for route in routes::AVAILABLE_ROUTES {
        body.push_str(&route.replace('<', "&lt;").replace('>', "&gt;"));
        body.push_str("<br/>");
    }
    Html(body)
}

/// Map middleware failures onto server-side errors
///
/// A request that outlives the timeout is dropped together with its store
/// query and reported as `AppError::Timeout`.
pub async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::Timeout
    } else {
        AppError::Internal(format!("unhandled middleware error: {}", err))
    }
}
