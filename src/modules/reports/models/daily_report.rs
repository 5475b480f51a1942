use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Amount reported for a day without any transactions
pub const ZERO_AMOUNT: &str = "0";

/// Revenue total for a single day that had at least one transaction
///
/// Produced by the repository; days without activity have no aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    /// Summed bill total, already rendered as decimal text
    pub amount: String,
}

impl DailyAggregate {
    pub fn new(date: NaiveDate, amount: impl Into<String>) -> Self {
        Self {
            date,
            amount: amount.into(),
        }
    }

    /// Build an aggregate from a summed decimal, dropping trailing zeros
    pub fn from_decimal(date: NaiveDate, amount: Decimal) -> Self {
        Self::new(date, amount.normalize().to_string())
    }

    /// Whether this aggregate belongs to `date`.
    ///
    /// Only day-of-month and month are compared; the year is ignored.
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.date.day() == date.day() && self.date.month() == date.month()
    }
}

/// One row of the dense report, one per calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReportRow {
    pub date: NaiveDate,
    #[serde(rename = "omzet")]
    pub amount: String,
}

impl DailyReportRow {
    pub fn new(date: NaiveDate, amount: impl Into<String>) -> Self {
        Self {
            date,
            amount: amount.into(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount == ZERO_AMOUNT
    }
}

impl From<DailyAggregate> for DailyReportRow {
    fn from(aggregate: DailyAggregate) -> Self {
        Self {
            date: aggregate.date,
            amount: aggregate.amount,
        }
    }
}
