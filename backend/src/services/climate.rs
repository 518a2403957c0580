//! Trailing-window and station queries
//!
//! "Last year" is measured back from the dataset's latest date so the
//! windows follow the data rather than a fixed calendar day.

use std::collections::BTreeMap;

use shared::{DateRange, Station, TobsObservation};

use crate::error::{AppError, AppResult};
use crate::store::ObservationStore;

/// Precipitation, temperature observation and station listings
#[derive(Clone)]
pub struct ClimateService {
    store: ObservationStore,
    window_days: i64,
}

impl ClimateService {
    pub fn new(store: ObservationStore, window_days: i64) -> Self {
        Self { store, window_days }
    }

    /// The trailing window ending on the latest measurement date
    ///
    /// `None` when the dataset holds no measurements.
    pub async fn trailing_window(&self) -> AppResult<Option<DateRange>> {
        let Some(latest) = self.store.latest_measurement_date().await? else {
            return Ok(None);
        };

        DateRange::trailing(&latest, self.window_days)
            .map(Some)
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "cannot derive a {} day window ending {}",
                    self.window_days, latest
                ))
            })
    }

    /// Date to precipitation over the trailing window
    ///
    /// Several stations report each day; the row with the highest id wins.
    pub async fn precipitation_last_year(&self) -> AppResult<BTreeMap<String, Option<f64>>> {
        let Some(window) = self.trailing_window().await? else {
            return Ok(BTreeMap::new());
        };

        let rows = self
            .store
            .precipitation_in_range(&window.start, window.end.as_deref())
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// Temperature observations over the trailing window
    pub async fn tobs_last_year(&self) -> AppResult<Vec<TobsObservation>> {
        let Some(window) = self.trailing_window().await? else {
            return Ok(Vec::new());
        };

        let measurements = self
            .store
            .measurements_in_range(&window.start, window.end.as_deref())
            .await?;

        Ok(measurements.into_iter().map(TobsObservation::from).collect())
    }

    pub async fn stations(&self) -> AppResult<Vec<Station>> {
        self.store.all_stations().await
    }
}
