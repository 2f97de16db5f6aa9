//! Station ranking integration tests
//!
//! Tests for the recommendation surface including:
//! - Preference scoring sign conventions
//! - Ranking order and top-5 truncation invariants
//! - Strict request parameter parsing

use chrono::NaiveDate;
use proptest::prelude::*;
use shared::models::{DailyRecord, StationAggregate};
use shared::types::{MonthCode, Preference};
use shared::validation::validate_record;

// Scoring as exposed by the API: direction-adjusted averages combined with
// the documented default 0.5/0.5 weights.
fn score(aggregate: &StationAggregate, rain: Preference, temp: Preference) -> f64 {
    let rain_score = match rain {
        Preference::High => aggregate.average_rainfall,
        Preference::Low => -aggregate.average_rainfall,
    };
    let temp_score = match temp {
        Preference::High => aggregate.average_temperature,
        Preference::Low => -aggregate.average_temperature,
    };
    rain_score * 0.5 + temp_score * 0.5
}

fn aggregate(name: &str, rain: f64, temp: f64) -> StationAggregate {
    StationAggregate {
        station_name: name.to_string(),
        average_rainfall: rain,
        average_temperature: temp,
        tourist_spot_name: format!("{} waterfront", name),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// High/High on 10 mm and 30 degrees gives 5 + 15 = 20
    #[test]
    fn test_high_high_worked_example() {
        let a = aggregate("CAIRNS", 10.0, 30.0);
        assert_eq!(score(&a, Preference::High, Preference::High), 20.0);
    }

    /// Low/Low flips the sign of the whole score
    #[test]
    fn test_low_low_worked_example() {
        let a = aggregate("CAIRNS", 10.0, 30.0);
        assert_eq!(score(&a, Preference::Low, Preference::Low), -20.0);
    }

    #[test]
    fn test_daily_mean_temperature() {
        let record = DailyRecord {
            date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            rainfall: 0.0,
            max_temperature: 30.0,
            min_temperature: 20.0,
            tourist_spot_name: "Kuranda Scenic Railway".to_string(),
        };
        assert_eq!(record.daily_mean_temperature(), 25.0);
    }

    #[test]
    fn test_record_validation_guards_the_boundary() {
        let mut record = DailyRecord {
            date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            rainfall: 2.5,
            max_temperature: 28.0,
            min_temperature: 18.0,
            tourist_spot_name: "Story Bridge".to_string(),
        };
        assert!(validate_record(&record).is_ok());

        record.rainfall = f64::NAN;
        assert!(validate_record(&record).is_err());
    }

    /// Month codes accept exactly "01" through "12"
    #[test]
    fn test_month_code_surface() {
        assert_eq!("12".parse::<MonthCode>().unwrap().number(), 12);
        assert!("13".parse::<MonthCode>().is_err());
        assert!("7".parse::<MonthCode>().is_err());
    }

    /// Preferences are strict; the old silent fallback to Low is gone
    #[test]
    fn test_preference_surface() {
        assert_eq!("High".parse::<Preference>().unwrap(), Preference::High);
        assert!("medium".parse::<Preference>().is_err());
    }

    /// The public payload carries the aggregate fields plus the score
    #[test]
    fn test_ranked_station_payload_shape() {
        let ranked = shared::models::RankedStation::new(aggregate("CAIRNS", 10.0, 30.0), 20.0);
        let value = serde_json::to_value(&ranked).unwrap();
        let object = value.as_object().unwrap();
        for field in [
            "station_name",
            "tourist_spot_name",
            "average_rainfall",
            "average_temperature",
            "combined_score",
        ] {
            assert!(object.contains_key(field), "missing field {}", field);
        }
        assert_eq!(value["combined_score"], 20.0);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Flipping both preferences negates the combined score.
    #[test]
    fn prop_preference_flip_negates_score(
        rain in 0.0f64..500.0,
        temp in -20.0f64..50.0,
    ) {
        let a = aggregate("X", rain, temp);
        let high = score(&a, Preference::High, Preference::High);
        let low = score(&a, Preference::Low, Preference::Low);
        prop_assert!((high + low).abs() < 1e-9);
    }

    /// Under a High rainfall preference, more rain never scores lower when
    /// temperature is held fixed.
    #[test]
    fn prop_more_rain_scores_higher_under_high(
        rain_a in 0.0f64..500.0,
        rain_b in 0.0f64..500.0,
        temp in -20.0f64..50.0,
    ) {
        let a = score(&aggregate("A", rain_a, temp), Preference::High, Preference::High);
        let b = score(&aggregate("B", rain_b, temp), Preference::High, Preference::High);
        if rain_a >= rain_b {
            prop_assert!(a >= b);
        }
    }

    /// Sorting scored aggregates descending never leaves an inversion, and
    /// keeping the top five never yields more than five entries.
    #[test]
    fn prop_ranking_sorted_and_truncated(
        values in prop::collection::vec((0.0f64..300.0, -10.0f64..45.0), 0..12),
    ) {
        let mut scored: Vec<(String, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, (rain, temp))| {
                let name = format!("S{:02}", i);
                let s = score(&aggregate(&name, *rain, *temp), Preference::High, Preference::Low);
                (name, s)
            })
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.truncate(5);

        prop_assert!(scored.len() <= 5);
        prop_assert!(scored.len() <= values.len());
        for window in scored.windows(2) {
            prop_assert!(window[0].1 >= window[1].1);
        }
    }

    /// The monthly temperature average always lies between the smallest and
    /// largest daily midpoint.
    #[test]
    fn prop_average_within_daily_midpoint_bounds(
        days in prop::collection::vec((-10.0f64..45.0, -20.0f64..35.0), 1..31),
    ) {
        let midpoints: Vec<f64> = days.iter().map(|(max, min)| (max + min) / 2.0).collect();
        let mean = midpoints.iter().sum::<f64>() / midpoints.len() as f64;
        let lo = midpoints.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = midpoints.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(mean >= lo - 1e-9 && mean <= hi + 1e-9);
    }
}
