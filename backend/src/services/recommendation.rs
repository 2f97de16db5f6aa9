//! Recommendation pipeline
//!
//! Orchestrates one request: enumerate the region's stations, fetch each
//! station's month-filtered records concurrently, aggregate the non-empty
//! sets and rank the aggregates against the user's preferences.

use std::time::Duration;

use futures::future::try_join_all;
use sqlx::PgPool;

use crate::config::{Config, RankingConfig};
use crate::error::{AppError, AppResult};
use crate::models::{DailyRecord, RankedStation};
use crate::services::aggregation::aggregate_station;
use crate::services::ranking::rank_stations;
use crate::services::StationService;
use shared::types::{MonthCode, Preference};

/// Recommendation service tying the record store to the ranking engine
#[derive(Clone)]
pub struct RecommendationService {
    store: StationService,
    weights: RankingConfig,
    fetch_timeout: Duration,
}

impl RecommendationService {
    pub fn new(db: PgPool, config: &Config) -> Self {
        Self {
            store: StationService::new(db),
            weights: config.ranking,
            fetch_timeout: Duration::from_secs(config.recommendation.fetch_timeout_secs),
        }
    }

    /// Produce the top-ranked stations for a region and month.
    ///
    /// Stations with no records for the month are silently excluded; if
    /// none remain this is a no-data condition, distinct from an unknown
    /// region.
    pub async fn recommend(
        &self,
        region_code: &str,
        month: MonthCode,
        rain_preference: Preference,
        temp_preference: Preference,
    ) -> AppResult<Vec<RankedStation>> {
        let station_ids = self.store.list_station_ids(region_code).await?;
        tracing::debug!(
            region = region_code,
            stations = station_ids.len(),
            month = %month,
            "fetching station records"
        );

        // Per-station fetches are independent, so issue them all at once
        // and bound the whole fan-out phase with one timeout.
        let fetches = station_ids.iter().map(|station_id| {
            let store = self.store.clone();
            async move {
                let records = store.fetch_records(station_id, month).await?;
                Ok::<_, AppError>((station_id.clone(), records))
            }
        });
        let station_records = tokio::time::timeout(self.fetch_timeout, try_join_all(fetches))
            .await
            .map_err(|_| AppError::FetchTimeout)??;

        let ranked = build_ranking(
            station_records,
            rain_preference,
            temp_preference,
            self.weights,
        );
        if ranked.is_empty() {
            return Err(AppError::NoData);
        }

        tracing::info!(
            region = region_code,
            month = %month,
            results = ranked.len(),
            "ranked stations"
        );
        Ok(ranked)
    }
}

/// Aggregate each non-empty record set and rank the results.
///
/// This is the pure tail of the pipeline, separated from the store access
/// so it can be exercised directly.
fn build_ranking(
    station_records: Vec<(String, Vec<DailyRecord>)>,
    rain_preference: Preference,
    temp_preference: Preference,
    weights: RankingConfig,
) -> Vec<RankedStation> {
    let aggregates = station_records
        .iter()
        .filter_map(|(station_id, records)| aggregate_station(station_id, records))
        .collect();
    rank_stations(aggregates, rain_preference, temp_preference, weights)
}
