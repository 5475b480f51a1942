use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};

use crate::core::{month_bounds, Result};
use crate::modules::reports::models::{DailyAggregate, MonthlyFilter, RangeFilter};

/// Storage contract for per-day revenue aggregates.
///
/// Implementations return aggregates sorted by date ascending. Errors are
/// handed back to the caller as-is; nothing above this layer retries.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// One page of the days in a month that had transactions, plus how many
    /// such days the month has in total
    async fn fetch_monthly(&self, filter: &MonthlyFilter) -> Result<(Vec<DailyAggregate>, u64)>;

    /// Every day in the range that had transactions, unpaginated
    async fn fetch_range(&self, filter: &RangeFilter) -> Result<Vec<DailyAggregate>>;

    /// Cheap connectivity check used by the readiness probe
    async fn ping(&self) -> Result<()>;
}

#[derive(Debug, FromRow)]
struct DailyOmzetRow {
    date: NaiveDate,
    omzet: Decimal,
}

impl From<DailyOmzetRow> for DailyAggregate {
    fn from(row: DailyOmzetRow) -> Self {
        DailyAggregate::from_decimal(row.date, row.omzet)
    }
}

const DAILY_OMZET_SQL: &str = r#"
    SELECT
        DATE(t.created_at) AS date,
        CAST(SUM(t.bill_total) AS DECIMAL(20, 2)) AS omzet
    FROM transactions t
    WHERE t.merchant_id = ?
      AND (? = 0 OR t.outlet_id = ?)
      AND t.created_at BETWEEN ? AND ?
    GROUP BY DATE(t.created_at)
    ORDER BY date ASC
"#;

/// MySQL-backed repository reading the `transactions` table
pub struct MySqlReportRepository {
    pool: MySqlPool,
}

impl MySqlReportRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn daily_omzet(
        &self,
        merchant_id: u64,
        outlet_id: u64,
        start: NaiveDateTime,
        end: NaiveDateTime,
        page: Option<(u32, u64)>,
    ) -> Result<Vec<DailyAggregate>> {
        let sql = match page {
            Some(_) => format!("{} LIMIT ? OFFSET ?", DAILY_OMZET_SQL),
            None => DAILY_OMZET_SQL.to_string(),
        };

        let mut query = sqlx::query_as::<_, DailyOmzetRow>(&sql)
            .bind(merchant_id)
            .bind(outlet_id)
            .bind(outlet_id)
            .bind(start)
            .bind(end);

        if let Some((limit, offset)) = page {
            query = query.bind(limit).bind(offset);
        }

        let rows = query.fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(DailyAggregate::from).collect())
    }
}

#[async_trait]
impl ReportRepository for MySqlReportRepository {
    async fn fetch_monthly(&self, filter: &MonthlyFilter) -> Result<(Vec<DailyAggregate>, u64)> {
        let (start, end) = month_bounds(filter.month);
        let offset = u64::from(filter.page.saturating_sub(1)) * u64::from(filter.limit);

        let rows = self
            .daily_omzet(
                filter.merchant_id,
                filter.outlet_id,
                start,
                end,
                Some((filter.limit, offset)),
            )
            .await?;

        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(DISTINCT DATE(t.created_at))
            FROM transactions t
            WHERE t.merchant_id = ?
              AND (? = 0 OR t.outlet_id = ?)
              AND t.created_at BETWEEN ? AND ?
            "#,
        )
        .bind(filter.merchant_id)
        .bind(filter.outlet_id)
        .bind(filter.outlet_id)
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok((rows, u64::try_from(count).unwrap_or(0)))
    }

    async fn fetch_range(&self, filter: &RangeFilter) -> Result<Vec<DailyAggregate>> {
        self.daily_omzet(
            filter.merchant_id,
            filter.outlet_id,
            filter.start,
            filter.end,
            None,
        )
        .await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

// Query behaviour against a live database is covered by running the service;
// the contract itself is exercised through in-memory fakes in tests/.
