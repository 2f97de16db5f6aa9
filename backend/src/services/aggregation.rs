//! Monthly aggregation of daily weather records
//!
//! Reduces one station's month-filtered record set to a single pair of
//! averages. Pure computation; the orchestration layer is responsible for
//! filtering out stations with no records before calling in here.

use shared::models::{DailyRecord, StationAggregate};

/// Arithmetic means over one station's records for the requested month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherAverages {
    pub rainfall: f64,
    pub temperature: f64,
}

/// Average a non-empty record set.
///
/// The rainfall average is the mean of daily rainfall; the temperature
/// average is the mean of each day's `(max + min) / 2`. Returns `None` for
/// an empty slice so a zero-record station can never divide by zero.
pub fn aggregate_records(records: &[DailyRecord]) -> Option<WeatherAverages> {
    if records.is_empty() {
        return None;
    }

    let count = records.len() as f64;
    let mut total_rain = 0.0;
    let mut total_temp = 0.0;
    for record in records {
        total_rain += record.rainfall;
        total_temp += record.daily_mean_temperature();
    }

    Some(WeatherAverages {
        rainfall: total_rain / count,
        temperature: total_temp / count,
    })
}

/// Build the per-station aggregate the ranker consumes.
///
/// The tourist-spot label is taken from the first record in store order,
/// which makes the (arbitrary) choice deterministic.
pub fn aggregate_station(station_name: &str, records: &[DailyRecord]) -> Option<StationAggregate> {
    let averages = aggregate_records(records)?;
    Some(StationAggregate {
        station_name: station_name.to_string(),
        average_rainfall: averages.rainfall,
        average_temperature: averages.temperature,
        tourist_spot_name: records[0].tourist_spot_name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, rainfall: f64, max: f64, min: f64) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2023, 3, day).unwrap(),
            rainfall,
            max_temperature: max,
            min_temperature: min,
            tourist_spot_name: "South Bank Parklands".to_string(),
        }
    }

    #[test]
    fn test_averages_match_worked_example() {
        // Two days: (rain 0, 20/10) and (rain 10, 30/20)
        let records = vec![record(1, 0.0, 20.0, 10.0), record(2, 10.0, 30.0, 20.0)];
        let averages = aggregate_records(&records).unwrap();
        assert_eq!(averages.rainfall, 5.0);
        // Daily means are 15 and 25, so the monthly mean is 20.
        assert_eq!(averages.temperature, 20.0);
    }

    #[test]
    fn test_single_record() {
        let records = vec![record(7, 3.2, 31.0, 21.0)];
        let averages = aggregate_records(&records).unwrap();
        assert_eq!(averages.rainfall, 3.2);
        assert_eq!(averages.temperature, 26.0);
    }

    #[test]
    fn test_empty_set_yields_none() {
        assert_eq!(aggregate_records(&[]), None);
        assert_eq!(aggregate_station("BRISBANE", &[]), None);
    }

    #[test]
    fn test_temperature_is_mean_of_daily_midpoints() {
        let records = vec![record(1, 0.0, 40.0, 0.0), record(2, 0.0, 10.0, 8.0)];
        let averages = aggregate_records(&records).unwrap();
        // Daily midpoints are 20 and 9.
        assert_eq!(averages.temperature, 14.5);
    }

    #[test]
    fn test_station_aggregate_uses_first_tourist_spot() {
        let mut records = vec![record(1, 1.0, 20.0, 10.0), record(2, 2.0, 22.0, 12.0)];
        records[1].tourist_spot_name = "Mount Coot-tha".to_string();
        let aggregate = aggregate_station("BRISBANE", &records).unwrap();
        assert_eq!(aggregate.station_name, "BRISBANE");
        assert_eq!(aggregate.tourist_spot_name, "South Bank Parklands");
    }

    #[test]
    fn test_zero_rainfall_month() {
        let records = vec![record(1, 0.0, 33.0, 24.0), record(2, 0.0, 35.0, 25.0)];
        let averages = aggregate_records(&records).unwrap();
        assert_eq!(averages.rainfall, 0.0);
    }
}
