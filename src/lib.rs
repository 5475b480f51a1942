//! Merchant revenue reporting service
//!
//! Turns sparse per-day transaction aggregates into paginated, date-complete
//! revenue reports for a merchant or one of its outlets.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::reports;
