//! Database models for the Weather Tourism Recommender
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
