//! Configuration management for the Weather Tourism Recommender
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WTR_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Ranking configuration
    pub ranking: RankingConfig,

    /// Recommendation pipeline configuration
    pub recommendation: RecommendationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

/// Weights applied to the direction-adjusted averages when scoring a
/// station. Both default to 0.5, the documented equal-weighting policy;
/// override them here or via `WTR_RANKING__RAINFALL_WEIGHT` /
/// `WTR_RANKING__TEMPERATURE_WEIGHT` to bias one metric.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct RankingConfig {
    pub rainfall_weight: f64,
    pub temperature_weight: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecommendationConfig {
    /// Upper bound in seconds on the whole station fan-out fetch phase
    pub fetch_timeout_secs: u64,

    /// Maximum number of records returned per station on the map feed
    pub map_record_limit: i64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("WTR_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("ranking.rainfall_weight", 0.5)?
            .set_default("ranking.temperature_weight", 0.5)?
            .set_default("recommendation.fetch_timeout_secs", 10)?
            .set_default("recommendation.map_record_limit", 1050)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WTR_ prefix)
            .add_source(
                Environment::with_prefix("WTR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            rainfall_weight: 0.5,
            temperature_weight: 0.5,
        }
    }
}
