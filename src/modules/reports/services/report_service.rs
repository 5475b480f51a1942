use std::sync::Arc;

use tracing::{debug, info};

use crate::core::clock::format_timestamp;
use crate::core::{local_now, Clock, Result};
use crate::modules::reports::models::{
    DailyReportRow, MonthlyFilter, PageRequest, RangeFilter, ReportEnvelope, ReportQuery,
    DEFAULT_LIMIT,
};
use crate::modules::reports::repositories::ReportRepository;

use super::dense_series::build_window;
use super::link_builder::{LinkBuilder, REPORTING_PATH, REPORT_PATH};
use super::page_window::{pagination, total_pages_by_days, total_pages_by_records};
use super::range_resolver::{is_valid_range, resolve_month, resolve_range};

/// Revenue reports for a merchant, optionally narrowed to one outlet
pub struct ReportService {
    report_repo: Arc<dyn ReportRepository>,
    links: LinkBuilder,
    default_limit: u32,
    clock: Clock,
}

impl ReportService {
    /// Create a new report service
    pub fn new(report_repo: Arc<dyn ReportRepository>, links: LinkBuilder) -> Self {
        Self {
            report_repo,
            links,
            default_limit: DEFAULT_LIMIT,
            clock: local_now,
        }
    }

    /// Page size used when a request has no positive limit
    pub fn with_default_limit(mut self, default_limit: u32) -> Self {
        self.default_limit = default_limit;
        self
    }

    /// Replace the wall clock used for the current-month fallback
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Access the underlying repository
    pub fn repository(&self) -> &Arc<dyn ReportRepository> {
        &self.report_repo
    }

    /// Monthly listing of the days that had transactions.
    ///
    /// Paging is done by the repository. An unparseable month means the
    /// current one.
    ///
    /// # Errors
    /// Repository failures are returned unchanged.
    pub async fn report(&self, query: &ReportQuery) -> Result<ReportEnvelope> {
        let paging = query.page_request(self.default_limit);
        let month = resolve_month(query.month.as_deref(), (self.clock)());

        debug!(
            merchant_id = query.merchant_id,
            outlet_id = query.outlet_id,
            month = %month.format("%Y-%m"),
            limit = paging.limit(),
            page = paging.page(),
            "Fetching monthly report"
        );

        let (aggregates, count) = self
            .report_repo
            .fetch_monthly(&MonthlyFilter {
                merchant_id: query.merchant_id,
                outlet_id: query.outlet_id,
                month,
                limit: paging.limit(),
                page: paging.page(),
            })
            .await?;

        let total_page = total_pages_by_records(count, paging.limit());
        let rows: Vec<DailyReportRow> = aggregates.into_iter().map(DailyReportRow::from).collect();

        info!(
            merchant_id = query.merchant_id,
            rows = rows.len(),
            total_page,
            "Monthly report generated"
        );

        Ok(self.assemble(REPORT_PATH, query.outlet_id, paging, total_page, rows))
    }

    /// Dense daily report over a date range, one row per calendar day.
    ///
    /// A missing or reversed range becomes the current calendar month. Pages
    /// count calendar days, not stored records.
    ///
    /// # Errors
    /// Repository failures are returned unchanged; no partial report is built.
    pub async fn reporting(&self, query: &ReportQuery) -> Result<ReportEnvelope> {
        let paging = query.page_request(self.default_limit);

        if !is_valid_range(query.start_date, query.end_date) {
            debug!(
                start_date = ?query.start_date,
                end_date = ?query.end_date,
                "Report range unusable, using current month"
            );
        }
        let range = resolve_range(query.start_date, query.end_date, (self.clock)());

        let aggregates = self
            .report_repo
            .fetch_range(&RangeFilter {
                merchant_id: query.merchant_id,
                outlet_id: query.outlet_id,
                start: range.start,
                end: range.end,
            })
            .await?;

        let total_days = range.total_days();
        let rows = build_window(&range, &aggregates, paging);
        let total_page = total_pages_by_days(total_days, paging.limit());

        info!(
            merchant_id = query.merchant_id,
            outlet_id = query.outlet_id,
            start = %format_timestamp(range.start),
            end = %format_timestamp(range.end),
            total_days,
            aggregates = aggregates.len(),
            rows = rows.len(),
            "Range report generated"
        );

        Ok(self.assemble(REPORTING_PATH, query.outlet_id, paging, total_page, rows))
    }

    fn assemble(
        &self,
        path: &str,
        outlet_id: u64,
        paging: PageRequest,
        total_page: u32,
        rows: Vec<DailyReportRow>,
    ) -> ReportEnvelope {
        let links = self.links.navigation(path, outlet_id, paging, total_page);
        ReportEnvelope::new(pagination(paging, total_page), links, rows)
    }
}
