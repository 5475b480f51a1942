use actix_web::{web, HttpResponse};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::core::AppError;
use crate::modules::reports::models::ReportQuery;
use crate::modules::reports::services::{ReportService, REPORTING_PATH, REPORT_PATH};

/// Query parameters for GET /report
#[derive(Debug, Deserialize)]
pub struct MonthlyReportParams {
    pub merchant_id: u64,
    #[serde(default)]
    pub outlet_id: Option<String>,
    /// Month token, format: YYYY-MM
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

/// Query parameters for GET /reporting
#[derive(Debug, Deserialize)]
pub struct RangeReportParams {
    pub merchant_id: u64,
    #[serde(default)]
    pub outlet_id: Option<String>,
    /// RFC 3339, "YYYY-MM-DD HH:MM:SS" or "YYYY-MM-DD"
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

impl From<MonthlyReportParams> for ReportQuery {
    fn from(params: MonthlyReportParams) -> Self {
        let mut query = ReportQuery::new(params.merchant_id, lenient(params.outlet_id.as_deref()))
            .with_paging(lenient(params.limit.as_deref()), lenient(params.page.as_deref()));
        query.month = params.date.filter(|date| !date.trim().is_empty());
        query
    }
}

impl From<RangeReportParams> for ReportQuery {
    fn from(params: RangeReportParams) -> Self {
        let mut query = ReportQuery::new(params.merchant_id, lenient(params.outlet_id.as_deref()))
            .with_paging(lenient(params.limit.as_deref()), lenient(params.page.as_deref()));
        query.start_date = params
            .start_date
            .as_deref()
            .and_then(|raw| parse_timestamp(raw, NaiveTime::MIN));
        // A bare end date covers that whole day, so 2024-01-01..2024-01-31 is
        // 31 days. Send `2024-01-31 00:00:00` to end at midnight instead.
        query.end_date = params
            .end_date
            .as_deref()
            .and_then(|raw| parse_timestamp(raw, end_of_day()));
        query
    }
}

/// Parse a report timestamp, returning `None` for anything unrecognized.
///
/// RFC 3339 values are converted to local wall time. A bare date gets
/// `date_time` as its time of day.
pub fn parse_timestamp(raw: &str, date_time: NaiveTime) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value.with_timezone(&Local).naive_local());
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(date_time))
        })
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}

// Unparseable numbers count as absent and are defaulted downstream.
fn lenient<T: std::str::FromStr + Default>(raw: Option<&str>) -> T {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or_default()
}

/// GET /report
///
/// Monthly listing of days with transactions, paginated by record count.
pub async fn get_report(
    service: web::Data<ReportService>,
    params: web::Query<MonthlyReportParams>,
) -> Result<HttpResponse, AppError> {
    let query = ReportQuery::from(params.into_inner());
    let envelope = service.report(&query).await?;

    Ok(HttpResponse::Ok().json(envelope))
}

/// GET /reporting
///
/// Dense daily revenue over a date range, paginated by calendar day.
pub async fn get_reporting(
    service: web::Data<ReportService>,
    params: web::Query<RangeReportParams>,
) -> Result<HttpResponse, AppError> {
    let query = ReportQuery::from(params.into_inner());
    let envelope = service.reporting(&query).await?;

    Ok(HttpResponse::Ok().json(envelope))
}

/// Configure routes for reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(REPORT_PATH, web::get().to(get_report))
        .route(REPORTING_PATH, web::get().to(get_reporting));
}
