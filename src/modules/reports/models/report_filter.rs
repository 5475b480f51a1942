use chrono::{NaiveDate, NaiveDateTime};

/// Repository filter for the storage-paginated monthly listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyFilter {
    pub merchant_id: u64,
    pub outlet_id: u64,
    /// Any day inside the requested month; only year and month are used
    pub month: NaiveDate,
    pub limit: u32,
    pub page: u32,
}

/// Repository filter for the unpaginated per-day range query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeFilter {
    pub merchant_id: u64,
    pub outlet_id: u64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}
