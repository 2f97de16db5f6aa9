//! HTTP request handlers

pub mod health;
pub mod recommendation;
pub mod station;

pub use health::*;
pub use recommendation::*;
pub use station::*;
