//! HTTP handlers for station metadata endpoints

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::station::StationWithRecords;
use crate::services::StationService;
use crate::AppState;

/// Map feed: every station holding records, with coordinates and a capped
/// record list. The visualization layer consumes this directly.
pub async fn list_stations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StationWithRecords>>> {
    let service = StationService::new(state.db.clone());
    let stations = service
        .list_stations_with_records(state.config.recommendation.map_record_limit)
        .await?;
    Ok(Json(stations))
}

/// Region codes known to the store, for the preference form
pub async fn list_regions(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let service = StationService::new(state.db.clone());
    let regions = service.list_regions().await?;
    Ok(Json(regions))
}
