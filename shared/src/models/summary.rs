//! Temperature summary models
//!
//! A [`TemperatureSummary`] is computed fresh for every request and is served
//! as a fixed-order list of [`SummaryEntry`] values: the date range first,
//! then TMIN, TAVG and TMAX. Clients index into that list, so the order is
//! part of the interface.

use serde::{Deserialize, Serialize};

/// Named aggregate kind in a summary response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservationKind {
    #[serde(rename = "TMIN")]
    Min,
    #[serde(rename = "TAVG")]
    Avg,
    #[serde(rename = "TMAX")]
    Max,
}

impl std::fmt::Display for ObservationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObservationKind::Min => write!(f, "TMIN"),
            ObservationKind::Avg => write!(f, "TAVG"),
            ObservationKind::Max => write!(f, "TMAX"),
        }
    }
}

/// Minimum, average and maximum temperature over a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    pub start_date: String,
    /// `None` only when the end was omitted and the dataset holds no rows
    pub end_date: Option<String>,
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

/// One element of the ordered summary response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryEntry {
    Range {
        start_date: String,
        end_date: Option<String>,
    },
    Observation {
        #[serde(rename = "Observation")]
        observation: ObservationKind,
        #[serde(rename = "Temperature")]
        temperature: Option<f64>,
    },
}

impl TemperatureSummary {
    /// True when no measurement matched the range
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }

    /// Shape into the four-element response: range, TMIN, TAVG, TMAX
    pub fn entries(&self) -> Vec<SummaryEntry> {
        vec![
            SummaryEntry::Range {
                start_date: self.start_date.clone(),
                end_date: self.end_date.clone(),
            },
            SummaryEntry::Observation {
                observation: ObservationKind::Min,
                temperature: self.min,
            },
            SummaryEntry::Observation {
                observation: ObservationKind::Avg,
                temperature: self.avg,
            },
            SummaryEntry::Observation {
                observation: ObservationKind::Max,
                temperature: self.max,
            },
        ]
    }
}
