//! HTTP handler for the station recommendation endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::RankedStation;
use crate::services::RecommendationService;
use crate::AppState;
use shared::types::{MonthCode, Preference};

/// Raw query parameters; every field is optional so missing ones can be
/// reported together instead of through a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub rainfall: Option<String>,
    pub temperature: Option<String>,
    pub region: Option<String>,
    pub month: Option<String>,
}

/// Validated form of [`RecommendationParams`]
#[derive(Debug)]
struct RecommendationRequest {
    rainfall: Preference,
    temperature: Preference,
    region: String,
    month: MonthCode,
}

impl RecommendationParams {
    fn validate(self) -> AppResult<RecommendationRequest> {
        let mut missing = Vec::new();
        if self.rainfall.is_none() {
            missing.push("rainfall");
        }
        if self.temperature.is_none() {
            missing.push("temperature");
        }
        if self.region.is_none() {
            missing.push("region");
        }
        if self.month.is_none() {
            missing.push("month");
        }
        if !missing.is_empty() {
            return Err(AppError::MissingParameters(missing.join(", ")));
        }

        let rainfall = self
            .rainfall
            .unwrap_or_default()
            .parse::<Preference>()
            .map_err(|e| AppError::Validation(format!("rainfall: {}", e)))?;
        let temperature = self
            .temperature
            .unwrap_or_default()
            .parse::<Preference>()
            .map_err(|e| AppError::Validation(format!("temperature: {}", e)))?;
        let month = self
            .month
            .unwrap_or_default()
            .parse::<MonthCode>()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(RecommendationRequest {
            rainfall,
            temperature,
            region: self.region.unwrap_or_default(),
            month,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub ranked_stations: Vec<RankedStation>,
}

/// Rank a region's stations for a month against the user's preferences
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
) -> AppResult<Json<RecommendationResponse>> {
    let request = params.validate()?;

    let service = RecommendationService::new(state.db.clone(), &state.config);
    let ranked_stations = service
        .recommend(
            &request.region,
            request.month,
            request.rainfall,
            request.temperature,
        )
        .await?;

    Ok(Json(RecommendationResponse { ranked_stations }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        rainfall: Option<&str>,
        temperature: Option<&str>,
        region: Option<&str>,
        month: Option<&str>,
    ) -> RecommendationParams {
        RecommendationParams {
            rainfall: rainfall.map(String::from),
            temperature: temperature.map(String::from),
            region: region.map(String::from),
            month: month.map(String::from),
        }
    }

    #[test]
    fn test_complete_params_validate() {
        let request = params(Some("High"), Some("Low"), Some("QLD"), Some("06"))
            .validate()
            .unwrap();
        assert_eq!(request.rainfall, Preference::High);
        assert_eq!(request.temperature, Preference::Low);
        assert_eq!(request.region, "QLD");
        assert_eq!(request.month.number(), 6);
    }

    #[test]
    fn test_missing_params_all_listed() {
        let err = params(Some("High"), None, None, Some("06"))
            .validate()
            .unwrap_err();
        match err {
            AppError::MissingParameters(list) => {
                assert_eq!(list, "temperature, region");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_preference_rejected() {
        let err = params(Some("Medium"), Some("Low"), Some("QLD"), Some("06"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_malformed_month_rejected() {
        let err = params(Some("High"), Some("Low"), Some("QLD"), Some("13"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
