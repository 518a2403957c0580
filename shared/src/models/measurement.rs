//! Daily measurement models

use serde::{Deserialize, Serialize};

/// One daily reading at one station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: i64,
    /// Natural identifier of the reporting station
    pub station: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Precipitation; `None` when nothing was recorded that day
    pub prcp: Option<f64>,
    /// Temperature observation
    pub tobs: f64,
}

/// Temperature observation as served by the `tobs` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TobsObservation {
    pub date: String,
    pub station: String,
    pub tobs: f64,
}

impl From<Measurement> for TobsObservation {
    fn from(m: Measurement) -> Self {
        Self {
            date: m.date,
            station: m.station,
            tobs: m.tobs,
        }
    }
}
