//! Preference-weighted station ranking
//!
//! Scores each station aggregate against the user's rainfall/temperature
//! preferences, orders descending and keeps the top 5. Pure computation.

use shared::models::{RankedStation, StationAggregate};
use shared::types::Preference;

use crate::config::RankingConfig;

/// Number of stations retained after ranking.
pub const TOP_STATIONS: usize = 5;

/// Score a single aggregate.
///
/// A `High` preference rewards a high average, `Low` rewards a low one by
/// negating it. The two direction-adjusted averages are combined as a
/// weighted sum using the configured weights.
fn combined_score(
    aggregate: &StationAggregate,
    rain_preference: Preference,
    temp_preference: Preference,
    weights: RankingConfig,
) -> f64 {
    let rain_score = match rain_preference {
        Preference::High => aggregate.average_rainfall,
        Preference::Low => -aggregate.average_rainfall,
    };
    let temp_score = match temp_preference {
        Preference::High => aggregate.average_temperature,
        Preference::Low => -aggregate.average_temperature,
    };
    rain_score * weights.rainfall_weight + temp_score * weights.temperature_weight
}

/// Rank station aggregates against the user's preferences.
///
/// Ordering is descending by combined score with ties broken by station
/// name ascending, so identical inputs always produce identical output.
/// An empty input yields an empty ranking, not an error; fewer than
/// [`TOP_STATIONS`] aggregates are all returned, ranked.
pub fn rank_stations(
    aggregates: Vec<StationAggregate>,
    rain_preference: Preference,
    temp_preference: Preference,
    weights: RankingConfig,
) -> Vec<RankedStation> {
    let mut ranked: Vec<RankedStation> = aggregates
        .into_iter()
        .map(|aggregate| {
            let score = combined_score(&aggregate, rain_preference, temp_preference, weights);
            RankedStation::new(aggregate, score)
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.combined_score
            .total_cmp(&a.combined_score)
            .then_with(|| a.station_name.cmp(&b.station_name))
    });
    ranked.truncate(TOP_STATIONS);
    ranked
}
