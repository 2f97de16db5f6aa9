//! Business logic services for the Weather Tourism Recommender

pub mod aggregation;
pub mod ranking;
pub mod recommendation;
pub mod station;

pub use recommendation::RecommendationService;
pub use station::StationService;
