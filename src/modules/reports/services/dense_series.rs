//! Zero-filled daily series over a resolved range.
//!
//! Storage only returns days that had transactions. The builder walks every
//! calendar day of the range in order, pulls the matching aggregate through a
//! forward-only cursor and writes `"0"` for the gaps.
//!
//! Within a year, aggregates match on day and month only. Once the range
//! reaches the same day of a later year that would be ambiguous, so the year
//! is compared as well.
//!
//! Aggregates must be sorted by date ascending. The cursor never moves back,
//! so an out-of-order aggregate whose day was already passed is left behind
//! and that day reports zero. This is a precondition on the repository, not
//! something the builder repairs.

use chrono::{Days, Months, NaiveDate};

use super::page_window::window_len;
use super::range_resolver::ResolvedRange;
use crate::modules::reports::models::{DailyAggregate, DailyReportRow, PageRequest, ZERO_AMOUNT};

/// Forward-only merge position into the sparse aggregates
struct AggregateCursor<'a> {
    aggregates: &'a [DailyAggregate],
    position: usize,
    compare_year: bool,
}

impl<'a> AggregateCursor<'a> {
    fn new(aggregates: &'a [DailyAggregate], compare_year: bool) -> Self {
        Self {
            aggregates,
            position: 0,
            compare_year,
        }
    }

    /// Amount recorded for `date`, searching from the current position onward.
    ///
    /// A hit consumes the matching aggregate, so it cannot be matched again by
    /// the same day and month of a later year.
    fn amount_for(&mut self, date: NaiveDate) -> &'a str {
        let aggregates = self.aggregates;
        let found = aggregates
            .iter()
            .enumerate()
            .skip(self.position)
            .find(|(_, aggregate)| {
                if self.compare_year {
                    aggregate.date == date
                } else {
                    aggregate.matches(date)
                }
            });

        match found {
            Some((index, aggregate)) => {
                self.position = index + 1;
                aggregate.amount.as_str()
            }
            None => ZERO_AMOUNT,
        }
    }
}

/// Rows of the dense series that fall on the requested page.
///
/// Produces exactly what slicing the full series would, without allocating
/// rows outside the page. Ordinals past the page end are never visited.
pub fn build_window(
    range: &ResolvedRange,
    aggregates: &[DailyAggregate],
    paging: PageRequest,
) -> Vec<DailyReportRow> {
    let total_days = range.total_days();
    let last = total_days.min(paging.window_end());
    let first = paging.window_start();

    let capacity = usize::try_from(window_len(total_days, paging)).unwrap_or(0);
    let mut rows = Vec::with_capacity(capacity);
    let mut cursor = AggregateCursor::new(aggregates, spans_more_than_a_year(range, total_days));

    // The cursor also walks the skipped prefix so it sits where a full
    // build would have left it.
    for (ordinal, date) in (1..=last).zip(range.start.date().iter_days()) {
        let amount = cursor.amount_for(date);
        if ordinal >= first {
            rows.push(DailyReportRow::new(date, amount));
        }
    }

    rows
}

/// Whether the series repeats some day and month of its first year
fn spans_more_than_a_year(range: &ResolvedRange, total_days: u64) -> bool {
    let first = range.start.date();
    let last = first.checked_add_days(Days::new(total_days.saturating_sub(1)));
    let anniversary = first.checked_add_months(Months::new(12));

    match (last, anniversary) {
        (Some(last), Some(anniversary)) => last >= anniversary,
        _ => true,
    }
}
