//! Temperature aggregation over caller-supplied date ranges
//!
//! An open-ended range is closed at the dataset's own latest date, never at
//! the wall clock: the dataset is historical and does not grow.

use shared::{DateRange, TemperatureSummary};

use crate::error::AppResult;
use crate::store::ObservationStore;

/// Computes TMIN/TAVG/TMAX summaries
#[derive(Clone)]
pub struct AggregationService {
    store: ObservationStore,
}

impl AggregationService {
    pub fn new(store: ObservationStore) -> Self {
        Self { store }
    }

    /// Summarize `tobs` over `range`, both bounds inclusive
    ///
    /// A missing end resolves to the latest measurement date. No matching
    /// rows is a success with every aggregate `None`.
    pub async fn summarize(&self, range: DateRange) -> AppResult<TemperatureSummary> {
        let DateRange { start, end } = range;

        let end = match end {
            Some(end) => Some(end),
            None => self.store.latest_measurement_date().await?,
        };

        let Some(end) = end else {
            tracing::debug!(%start, "Dataset is empty, nothing to summarize");
            return Ok(TemperatureSummary {
                start_date: start,
                end_date: None,
                min: None,
                avg: None,
                max: None,
            });
        };

        let (min, avg, max) = self.store.temperature_aggregates(&start, &end).await?;
        tracing::debug!(%start, %end, ?min, ?avg, ?max, "Summarized temperatures");

        Ok(TemperatureSummary {
            start_date: start,
            end_date: Some(end),
            min,
            avg,
            max,
        })
    }
}
