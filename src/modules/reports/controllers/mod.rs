mod report_controller;

pub use report_controller::{
    configure, get_report, get_reporting, parse_timestamp, MonthlyReportParams, RangeReportParams,
};
