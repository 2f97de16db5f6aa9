//! Daily weather record models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day's observation for one station.
///
/// Records are produced by the record store, already filtered to the
/// requested month, and are read-only inputs to the aggregation step.
/// `tourist_spot_name` is denormalized onto every record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Rainfall in millimeters; zero is common and meaningful.
    pub rainfall: f64,
    /// Daily maximum temperature in degrees Celsius.
    pub max_temperature: f64,
    /// Daily minimum temperature in degrees Celsius.
    pub min_temperature: f64,
    pub tourist_spot_name: String,
}

impl DailyRecord {
    /// Midpoint of the day's maximum and minimum temperature, the per-day
    /// value the monthly temperature average is computed over.
    pub fn daily_mean_temperature(&self) -> f64 {
        (self.max_temperature + self.min_temperature) / 2.0
    }
}
