//! CSV import tool for seeding the record store
//!
//! Loads station metadata and daily observations into PostgreSQL:
//!
//! ```text
//! import-records <stations.csv> <records.csv>
//! ```
//!
//! `stations.csv` columns: station_id, region_code, latitude, longitude,
//! tourist_spot_name. `records.csv` columns: station_id, date (YYYY-MM-DD),
//! rainfall, max_temperature, min_temperature, tourist_spot_name. Existing
//! rows are upserted, so re-running an import is safe.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use shared::models::DailyRecord;
use shared::validation::{validate_coordinates, validate_record};

#[derive(Debug, Deserialize)]
struct StationCsvRow {
    station_id: String,
    region_code: String,
    latitude: f64,
    longitude: f64,
    tourist_spot_name: String,
}

#[derive(Debug, Deserialize)]
struct RecordCsvRow {
    station_id: String,
    date: NaiveDate,
    rainfall: f64,
    max_temperature: f64,
    min_temperature: f64,
    tourist_spot_name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "import_records=info".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let (stations_path, records_path) = match args.as_slice() {
        [_, stations, records] => (stations.clone(), records.clone()),
        _ => bail!("usage: import-records <stations.csv> <records.csv>"),
    };

    let database_url = std::env::var("WTR_DATABASE__URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .context("set WTR_DATABASE__URL or DATABASE_URL")?;

    let db = PgPoolOptions::new()
        .max_connections(4)
        .connect(&database_url)
        .await
        .context("connecting to database")?;

    sqlx::migrate!("./migrations").run(&db).await?;

    let station_count = import_stations(&db, &stations_path).await?;
    tracing::info!("Imported {} stations", station_count);

    let record_count = import_records(&db, &records_path).await?;
    tracing::info!("Imported {} daily records", record_count);

    Ok(())
}

async fn import_stations(db: &PgPool, path: &str) -> Result<usize> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening stations file {}", path))?;

    let mut count = 0;
    for result in reader.deserialize() {
        let row: StationCsvRow = result.context("parsing station row")?;
        validate_coordinates(row.latitude, row.longitude)
            .map_err(|reason| anyhow::anyhow!("station '{}': {}", row.station_id, reason))?;

        sqlx::query(
            r#"
            INSERT INTO stations (station_id, region_code, latitude, longitude, tourist_spot_name)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (station_id) DO UPDATE SET
                region_code = EXCLUDED.region_code,
                latitude = EXCLUDED.latitude,
                longitude = EXCLUDED.longitude,
                tourist_spot_name = EXCLUDED.tourist_spot_name
            "#,
        )
        .bind(&row.station_id)
        .bind(&row.region_code)
        .bind(row.latitude)
        .bind(row.longitude)
        .bind(&row.tourist_spot_name)
        .execute(db)
        .await?;
        count += 1;
    }
    Ok(count)
}

async fn import_records(db: &PgPool, path: &str) -> Result<usize> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening records file {}", path))?;

    let mut count = 0;
    let mut skipped = 0;
    for result in reader.deserialize() {
        let row: RecordCsvRow = result.context("parsing record row")?;
        let record = DailyRecord {
            date: row.date,
            rainfall: row.rainfall,
            max_temperature: row.max_temperature,
            min_temperature: row.min_temperature,
            tourist_spot_name: row.tourist_spot_name,
        };

        // Skip bad observations rather than aborting a large import.
        if let Err(reason) = validate_record(&record) {
            tracing::warn!(
                station = %row.station_id,
                date = %record.date,
                "skipping record: {}",
                reason
            );
            skipped += 1;
            continue;
        }

        sqlx::query(
            r#"
            INSERT INTO daily_records
                (station_id, date, rainfall, max_temperature, min_temperature, tourist_spot_name)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (station_id, date) DO UPDATE SET
                rainfall = EXCLUDED.rainfall,
                max_temperature = EXCLUDED.max_temperature,
                min_temperature = EXCLUDED.min_temperature,
                tourist_spot_name = EXCLUDED.tourist_spot_name
            "#,
        )
        .bind(&row.station_id)
        .bind(record.date)
        .bind(record.rainfall)
        .bind(record.max_temperature)
        .bind(record.min_temperature)
        .bind(&record.tourist_spot_name)
        .execute(db)
        .await?;
        count += 1;
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} records that failed validation", skipped);
    }
    Ok(count)
}
