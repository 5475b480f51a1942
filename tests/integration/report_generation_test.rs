//! Integration tests for report generation
//!
//! Drives `ReportService` end to end against the in-memory repository:
//! sparse ledgers in, dense and paginated envelopes out.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use helpers::*;
use reporting::core::AppError;
use reporting::reports::models::ReportQuery;
use reporting::reports::services::LinkBuilder;
use reporting::reports::ReportService;
use rust_decimal_macros::dec;

fn service(repo: Arc<InMemoryReportRepository>) -> ReportService {
    ReportService::new(repo, LinkBuilder::new("http://localhost:3000").unwrap())
        .with_clock(|| at(2024, 1, 20, 14, 0, 0))
}

fn january_query() -> ReportQuery {
    ReportQuery::new(MERCHANT_ID, 0).with_range(at(2024, 1, 1, 0, 0, 0), at(2024, 1, 31, 0, 0, 0))
}

#[tokio::test]
async fn test_first_page_of_january() {
    let repo = Arc::new(InMemoryReportRepository::new(january_ledger()));
    let envelope = service(repo)
        .reporting(&january_query().with_paging(10, 1))
        .await
        .unwrap();

    assert_eq!(envelope.pagination.total_page, 3);
    assert_eq!(envelope.rows.len(), 10);
    assert_eq!(envelope.rows[0].date, date(2024, 1, 1));
    assert_eq!(envelope.rows[9].date, date(2024, 1, 10));

    // Two outlets on Jan 5 are summed; the other merchant is excluded.
    assert_eq!(envelope.rows[1].amount, "1000");
    assert_eq!(envelope.rows[4].amount, "1500");
    assert_eq!(envelope.rows[0].amount, "0");

    assert_eq!(
        envelope.links.current,
        "http://localhost:3000/reporting?limit=10&page=1"
    );
    assert_eq!(
        envelope.links.next.as_deref(),
        Some("http://localhost:3000/reporting?limit=10&page=2")
    );
    assert_eq!(envelope.links.previous, None);
}

#[tokio::test]
async fn test_third_and_fourth_pages() {
    let repo = Arc::new(InMemoryReportRepository::new(january_ledger()));
    let svc = service(repo);

    let page3 = svc.reporting(&january_query().with_paging(10, 3)).await.unwrap();
    assert_eq!(page3.rows.len(), 10);
    assert_eq!(page3.rows[0].date, date(2024, 1, 21));
    assert_eq!(page3.rows[9].date, date(2024, 1, 30));
    assert_eq!(page3.rows[4].amount, "300");
    assert!(page3.links.previous.as_deref().unwrap().ends_with("page=2"));

    // The range ends at Jan 31 00:00, so Jan 31 itself is not a report day.
    let page4 = svc.reporting(&january_query().with_paging(10, 4)).await.unwrap();
    assert!(page4.rows.is_empty());
    assert_eq!(page4.pagination.total_page, 3);
}

#[tokio::test]
async fn test_end_of_day_range_includes_last_day() {
    let repo = Arc::new(InMemoryReportRepository::new(january_ledger()));
    let query = ReportQuery::new(MERCHANT_ID, 0)
        .with_range(at(2024, 1, 1, 0, 0, 0), at(2024, 1, 31, 23, 59, 59))
        .with_paging(10, 4);

    let envelope = service(repo).reporting(&query).await.unwrap();

    assert_eq!(envelope.pagination.total_page, 4);
    assert_eq!(envelope.rows.len(), 1);
    assert_eq!(envelope.rows[0].date, date(2024, 1, 31));
    assert_eq!(envelope.rows[0].amount, "125");
}

#[tokio::test]
async fn test_outlet_filter() {
    let repo = Arc::new(InMemoryReportRepository::new(january_ledger()));
    let query = ReportQuery::new(MERCHANT_ID, OUTLET_B)
        .with_range(at(2024, 1, 1, 0, 0, 0), at(2024, 1, 31, 23, 59, 59))
        .with_paging(31, 1);

    let envelope = service(repo).reporting(&query).await.unwrap();

    let non_zero: Vec<_> = envelope
        .rows
        .iter()
        .filter(|row| !row.is_zero())
        .map(|row| (row.date, row.amount.as_str()))
        .collect();
    assert_eq!(
        non_zero,
        vec![(date(2024, 1, 5), "500"), (date(2024, 1, 25), "300")]
    );
    assert!(envelope.links.current.contains("outlet_id=20"));
    assert_eq!(envelope.links.next, None);
}

#[tokio::test]
async fn test_decimal_amounts_are_text() {
    let repo = Arc::new(InMemoryReportRepository::new(january_ledger()));
    let envelope = service(repo)
        .reporting(&january_query().with_paging(10, 2))
        .await
        .unwrap();

    assert_eq!(envelope.rows[1].date, date(2024, 1, 12));
    assert_eq!(envelope.rows[1].amount, "2750.5");
}

#[tokio::test]
async fn test_reversed_range_reports_current_month() {
    let repo = Arc::new(InMemoryReportRepository::new(january_ledger()));
    let query = ReportQuery::new(MERCHANT_ID, 0)
        .with_range(at(2024, 3, 1, 0, 0, 0), at(2024, 2, 1, 0, 0, 0))
        .with_paging(0, 0);

    let envelope = service(repo.clone()).reporting(&query).await.unwrap();

    let filter = repo.range_calls.lock().unwrap()[0].clone();
    assert_eq!(filter.start, at(2024, 1, 1, 0, 0, 0));
    assert_eq!(filter.end, at(2024, 1, 31, 23, 59, 59));

    assert_eq!(envelope.pagination.limit, 10);
    assert_eq!(envelope.pagination.page, 1);
    assert_eq!(envelope.pagination.total_page, 4);
    assert_eq!(envelope.rows[4].amount, "1500");
}

#[tokio::test]
async fn test_range_across_two_months() {
    let ledger = vec![
        sale(OUTLET_A, at(2024, 1, 30, 10, 0, 0), dec!(100)),
        sale(OUTLET_A, at(2024, 2, 2, 10, 0, 0), dec!(200)),
    ];
    let repo = Arc::new(InMemoryReportRepository::new(ledger));
    let query = ReportQuery::new(MERCHANT_ID, 0)
        .with_range(at(2024, 1, 29, 0, 0, 0), at(2024, 2, 3, 23, 59, 59))
        .with_paging(10, 1);

    let envelope = service(repo).reporting(&query).await.unwrap();

    let rows: Vec<_> = envelope
        .rows
        .iter()
        .map(|row| (row.date, row.amount.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (date(2024, 1, 29), "0"),
            (date(2024, 1, 30), "100"),
            (date(2024, 1, 31), "0"),
            (date(2024, 2, 1), "0"),
            (date(2024, 2, 2), "200"),
            (date(2024, 2, 3), "0"),
        ]
    );
}

#[tokio::test]
async fn test_monthly_report_is_storage_paginated() {
    let repo = Arc::new(InMemoryReportRepository::new(january_ledger()));
    let query = ReportQuery::new(MERCHANT_ID, 0)
        .with_month("2024-01")
        .with_paging(2, 2);

    let envelope = service(repo.clone()).report(&query).await.unwrap();

    // Five active days at two per page: floor(5 / 2) = 2 pages.
    assert_eq!(envelope.pagination.total_page, 2);
    assert_eq!(envelope.rows.len(), 2);
    assert_eq!(envelope.rows[0].date, date(2024, 1, 12));
    assert_eq!(envelope.rows[1].date, date(2024, 1, 25));
    assert_eq!(
        envelope.links.current,
        "http://localhost:3000/report?limit=2&page=2"
    );
    assert!(envelope.links.next.as_deref().unwrap().ends_with("page=3"));
    assert!(envelope.links.previous.as_deref().unwrap().ends_with("page=1"));

    let filter = repo.monthly_calls.lock().unwrap()[0].clone();
    assert_eq!(filter.limit, 2);
    assert_eq!(filter.page, 2);
}

#[tokio::test]
async fn test_storage_failure_aborts_report() {
    let repo = Arc::new(
        InMemoryReportRepository::new(january_ledger())
            .fail_with(AppError::Database(sqlx::Error::PoolTimedOut)),
    );

    let result = service(repo).reporting(&january_query()).await;
    assert!(matches!(
        result,
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    ));
}
