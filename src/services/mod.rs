//! Business logic services.

pub mod analytics;
pub mod lead;
