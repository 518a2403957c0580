//! HTTP handlers for precipitation, temperature observation and station listings

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use shared::{Station, TobsObservation};

use crate::error::AppResult;
use crate::services::ClimateService;
use crate::AppState;

fn climate_service(state: &AppState) -> ClimateService {
    ClimateService::new(state.store.clone(), state.config.query.trailing_window_days)
}

/// Date to precipitation for the trailing year
pub async fn get_precipitation(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, Option<f64>>>> {
    tracing::debug!("Received precipitation request");
    let precipitation = climate_service(&state).precipitation_last_year().await?;
    Ok(Json(precipitation))
}

/// All stations in the dataset
pub async fn list_stations(State(state): State<AppState>) -> AppResult<Json<Vec<Station>>> {
    tracing::debug!("Received stations request");
    let stations = climate_service(&state).stations().await?;
    Ok(Json(stations))
}

/// Temperature observations for the trailing year
pub async fn get_tobs(State(state): State<AppState>) -> AppResult<Json<Vec<TobsObservation>>> {
    tracing::debug!("Received tobs request");
    let observations = climate_service(&state).tobs_last_year().await?;
    Ok(Json(observations))
}
