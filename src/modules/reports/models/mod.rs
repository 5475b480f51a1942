pub mod daily_report;
pub mod report_envelope;
pub mod report_filter;
pub mod report_query;

pub use daily_report::{DailyAggregate, DailyReportRow, ZERO_AMOUNT};
pub use report_envelope::{NavigationLinks, Pagination, ReportEnvelope};
pub use report_filter::{MonthlyFilter, RangeFilter};
pub use report_query::{PageRequest, ReportQuery, DEFAULT_LIMIT};
