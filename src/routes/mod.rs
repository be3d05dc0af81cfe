//! Route definitions for the leadboard API.

pub mod analytics;
pub mod health;
pub mod leads;
