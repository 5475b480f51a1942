use chrono::NaiveDateTime;

/// Page size used when the request carries none
pub const DEFAULT_LIMIT: u32 = 10;

/// Page used when the request carries none
pub const DEFAULT_PAGE: u32 = 1;

/// A revenue report request for one merchant, optionally narrowed to an outlet
///
/// `limit` and `page` are kept as received; use [`ReportQuery::page_request`]
/// to get the normalized values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportQuery {
    pub merchant_id: u64,
    /// Zero means every outlet of the merchant
    pub outlet_id: u64,
    /// "YYYY-MM" token for the monthly listing
    pub month: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub limit: i64,
    pub page: i64,
}

impl ReportQuery {
    pub fn new(merchant_id: u64, outlet_id: u64) -> Self {
        Self {
            merchant_id,
            outlet_id,
            ..Self::default()
        }
    }

    pub fn with_range(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    pub fn with_paging(mut self, limit: i64, page: i64) -> Self {
        self.limit = limit;
        self.page = page;
        self
    }

    /// Normalized paging, substituting defaults for non-positive values
    pub fn page_request(&self, default_limit: u32) -> PageRequest {
        PageRequest::normalize(self.limit, self.page, default_limit)
    }
}

/// Validated page/limit pair, both always > 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: u32,
    page: u32,
}

impl PageRequest {
    pub fn new(limit: u32, page: u32) -> Self {
        Self::normalize(i64::from(limit), i64::from(page), DEFAULT_LIMIT)
    }

    pub fn normalize(limit: i64, page: i64, default_limit: u32) -> Self {
        let default_limit = if default_limit == 0 {
            DEFAULT_LIMIT
        } else {
            default_limit
        };

        Self {
            limit: positive_u32(limit).unwrap_or(default_limit),
            page: positive_u32(page).unwrap_or(DEFAULT_PAGE),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Number of items on the pages before this one
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// First 1-based ordinal that belongs to this page
    pub fn window_start(&self) -> u64 {
        self.offset() + 1
    }

    /// Last 1-based ordinal that belongs to this page
    pub fn window_end(&self) -> u64 {
        u64::from(self.page) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

fn positive_u32(value: i64) -> Option<u32> {
    if value <= 0 {
        return None;
    }
    Some(u32::try_from(value).unwrap_or(u32::MAX))
}
