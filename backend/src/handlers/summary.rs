//! HTTP handlers for temperature summaries
//!
//! Dates arrive as raw path segments and are passed through untouched; a
//! malformed date matches no rows and yields null aggregates.

use axum::{
    extract::{Path, State},
    Json,
};
use shared::{DateRange, SummaryEntry};

use crate::error::AppResult;
use crate::services::AggregationService;
use crate::AppState;

/// TMIN/TAVG/TMAX from `start` through the latest recorded date
pub async fn summarize_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> AppResult<Json<Vec<SummaryEntry>>> {
    tracing::debug!(%start, "Received start request");
    let service = AggregationService::new(state.store);
    let summary = service.summarize(DateRange::from_start(start)).await?;
    Ok(Json(summary.entries()))
}

/// TMIN/TAVG/TMAX between `start` and `end`, inclusive
pub async fn summarize_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> AppResult<Json<Vec<SummaryEntry>>> {
    tracing::debug!(%start, %end, "Received start and end request");
    let service = AggregationService::new(state.store);
    let summary = service.summarize(DateRange::between(start, end)).await?;
    Ok(Json(summary.entries()))
}
