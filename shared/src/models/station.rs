//! Station models: metadata, per-request aggregates and ranking results

use serde::{Deserialize, Serialize};

/// A fixed weather-observation point with coordinates and an associated
/// tourist-spot label, grouped into regions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    pub station_id: String,
    pub region_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub tourist_spot_name: String,
}

/// Monthly averages for one station, derived per request from its daily
/// records. Only stations with at least one matching record produce an
/// aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationAggregate {
    pub station_name: String,
    pub average_rainfall: f64,
    /// Mean of each day's `(max + min) / 2`, not a mean of the extremes.
    pub average_temperature: f64,
    /// Copied from the first record as returned by the store.
    pub tourist_spot_name: String,
}

/// A station aggregate plus its preference score, as returned to the
/// presentation layer. Ordered descending by `combined_score`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedStation {
    pub station_name: String,
    pub tourist_spot_name: String,
    pub average_rainfall: f64,
    pub average_temperature: f64,
    pub combined_score: f64,
}

impl RankedStation {
    pub fn new(aggregate: StationAggregate, combined_score: f64) -> Self {
        Self {
            station_name: aggregate.station_name,
            tourist_spot_name: aggregate.tourist_spot_name,
            average_rainfall: aggregate.average_rainfall,
            average_temperature: aggregate.average_temperature,
            combined_score,
        }
    }
}
