//! Shared types and models for the Weather Tourism Recommender
//!
//! This crate contains the domain model used by the backend: daily weather
//! records, per-station aggregates, and the strongly typed request
//! parameters (preferences and month codes).

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
