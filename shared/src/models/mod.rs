//! Domain models for the Weather Tourism Recommender

pub mod record;
pub mod station;

pub use record::*;
pub use station::*;
