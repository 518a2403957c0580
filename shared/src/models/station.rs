//! Weather station models

use serde::{Deserialize, Serialize};

/// A physical sensor site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Surrogate key
    pub id: i64,
    /// Natural identifier, e.g. `USC00519397`
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}
