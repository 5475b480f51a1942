pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{DailyAggregate, DailyReportRow, ReportEnvelope, ReportQuery};
pub use repositories::{MySqlReportRepository, ReportRepository};
pub use services::ReportService;
