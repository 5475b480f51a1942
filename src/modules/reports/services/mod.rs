pub mod dense_series;
pub mod link_builder;
pub mod page_window;
pub mod range_resolver;
pub mod report_service;

pub use link_builder::{LinkBuilder, REPORTING_PATH, REPORT_PATH};
pub use range_resolver::ResolvedRange;
pub use report_service::ReportService;
