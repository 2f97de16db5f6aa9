//! Station record store
//!
//! The PostgreSQL-backed source of station metadata and daily weather
//! records. All numeric fields are validated here, at the boundary, so the
//! aggregation step can assume finite, well-typed values.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{DailyRecord, Station};
use shared::types::MonthCode;
use shared::validation::validate_record;

/// Station service backed by the shared connection pool
#[derive(Clone)]
pub struct StationService {
    db: PgPool,
}

/// Database row for a daily record
#[derive(Debug, Clone, sqlx::FromRow)]
struct DailyRecordRow {
    pub date: NaiveDate,
    pub rainfall: f64,
    pub max_temperature: f64,
    pub min_temperature: f64,
    pub tourist_spot_name: String,
}

impl From<DailyRecordRow> for DailyRecord {
    fn from(row: DailyRecordRow) -> Self {
        Self {
            date: row.date,
            rainfall: row.rainfall,
            max_temperature: row.max_temperature,
            min_temperature: row.min_temperature,
            tourist_spot_name: row.tourist_spot_name,
        }
    }
}

/// Database row for station metadata
#[derive(Debug, Clone, sqlx::FromRow)]
struct StationRow {
    pub station_id: String,
    pub region_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub tourist_spot_name: String,
}

impl From<StationRow> for Station {
    fn from(row: StationRow) -> Self {
        Self {
            station_id: row.station_id,
            region_code: row.region_code,
            latitude: row.latitude,
            longitude: row.longitude,
            tourist_spot_name: row.tourist_spot_name,
        }
    }
}

/// A station with its stored records, as served to the map view
#[derive(Debug, Clone, Serialize)]
pub struct StationWithRecords {
    #[serde(flatten)]
    pub station: Station,
    pub records: Vec<DailyRecord>,
}

impl StationService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List the station identifiers belonging to a region.
    ///
    /// Regions are defined by their stations, so an unknown code surfaces
    /// as a region-not-found error.
    pub async fn list_station_ids(&self, region_code: &str) -> AppResult<Vec<String>> {
        let ids: Vec<String> = sqlx::query_scalar(
            "SELECT station_id FROM stations WHERE region_code = $1 ORDER BY station_id",
        )
        .bind(region_code)
        .fetch_all(&self.db)
        .await?;

        if ids.is_empty() {
            return Err(AppError::RegionNotFound(region_code.to_string()));
        }
        Ok(ids)
    }

    /// List all known region codes.
    pub async fn list_regions(&self) -> AppResult<Vec<String>> {
        let regions = sqlx::query_scalar(
            "SELECT DISTINCT region_code FROM stations ORDER BY region_code",
        )
        .fetch_all(&self.db)
        .await?;
        Ok(regions)
    }

    /// Fetch one station's daily records for the given calendar month,
    /// across all stored years, ordered by date. The result may be empty.
    pub async fn fetch_records(
        &self,
        station_id: &str,
        month: MonthCode,
    ) -> AppResult<Vec<DailyRecord>> {
        let rows: Vec<DailyRecordRow> = sqlx::query_as(
            r#"
            SELECT date, rainfall, max_temperature, min_temperature, tourist_spot_name
            FROM daily_records
            WHERE station_id = $1 AND EXTRACT(MONTH FROM date)::int = $2
            ORDER BY date
            "#,
        )
        .bind(station_id)
        .bind(month.number() as i32)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter()
            .map(|row| {
                let record = DailyRecord::from(row);
                validate_record(&record).map_err(|reason| {
                    AppError::DataQuality(format!(
                        "record for station '{}' on {}: {}",
                        station_id, record.date, reason
                    ))
                })?;
                Ok(record)
            })
            .collect()
    }

    /// All stations that have at least one stored record, with their
    /// coordinates and up to `record_limit` records each. This feeds the
    /// map rendering layer.
    pub async fn list_stations_with_records(
        &self,
        record_limit: i64,
    ) -> AppResult<Vec<StationWithRecords>> {
        let stations: Vec<StationRow> = sqlx::query_as(
            r#"
            SELECT station_id, region_code, latitude, longitude, tourist_spot_name
            FROM stations
            ORDER BY station_id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let mut result = Vec::with_capacity(stations.len());
        for row in stations {
            let station = Station::from(row);
            let rows: Vec<DailyRecordRow> = sqlx::query_as(
                r#"
                SELECT date, rainfall, max_temperature, min_temperature, tourist_spot_name
                FROM daily_records
                WHERE station_id = $1
                ORDER BY date
                LIMIT $2
                "#,
            )
            .bind(&station.station_id)
            .bind(record_limit)
            .fetch_all(&self.db)
            .await?;

            // Stations with no stored documents are omitted from the feed.
            if rows.is_empty() {
                continue;
            }

            result.push(StationWithRecords {
                station,
                records: rows.into_iter().map(DailyRecord::from).collect(),
            });
        }

        Ok(result)
    }
}
