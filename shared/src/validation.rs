//! Validation utilities for the Weather Tourism Recommender
//!
//! Daily records enter the system from external data sets, so numeric
//! fields are checked at the record-store boundary. Downstream aggregation
//! assumes records that passed these checks.

use crate::models::DailyRecord;

/// Validate a daily record's numeric fields.
///
/// Rejects non-finite values and negative rainfall. No ordering between
/// max and min temperature is enforced; the source data does not guarantee
/// one.
pub fn validate_record(record: &DailyRecord) -> Result<(), &'static str> {
    if !record.rainfall.is_finite() {
        return Err("rainfall must be a finite number");
    }
    if record.rainfall < 0.0 {
        return Err("rainfall cannot be negative");
    }
    if !record.max_temperature.is_finite() {
        return Err("max temperature must be a finite number");
    }
    if !record.min_temperature.is_finite() {
        return Err("min temperature must be a finite number");
    }
    Ok(())
}

/// Validate a station's coordinates.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), &'static str> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err("latitude must be between -90 and 90");
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err("longitude must be between -180 and 180");
    }
    Ok(())
}
