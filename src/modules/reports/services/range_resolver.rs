use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::core::month_bounds;

/// A report window that has passed validation or been defaulted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ResolvedRange {
    /// Calendar days spanned by the range, counting a partial day as a full one
    pub fn total_days(&self) -> u64 {
        let span = self.end - self.start;
        if span <= Duration::zero() {
            return 0;
        }

        let whole = span.num_days();
        let partial = span > Duration::days(whole);
        u64::try_from(whole).unwrap_or(0) + u64::from(partial)
    }
}

/// A range is usable only when both ends are present and ordered
pub fn is_valid_range(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> bool {
    matches!((start, end), (Some(start), Some(end)) if start <= end)
}

/// The whole calendar month containing `now`
pub fn current_month(now: NaiveDateTime) -> ResolvedRange {
    let (start, end) = month_bounds(now.date());
    ResolvedRange { start, end }
}

/// Resolve the requested range, replacing an unusable pair with the current month.
///
/// Both ends are replaced together; a valid start is never kept next to a
/// defaulted end.
pub fn resolve_range(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> ResolvedRange {
    match (start, end) {
        (Some(start), Some(end)) if start <= end => ResolvedRange { start, end },
        _ => current_month(now),
    }
}

/// Resolve a "YYYY-MM" token to the first day of that month.
///
/// Anything unparseable silently means the month of `now`.
pub fn resolve_month(token: Option<&str>, now: NaiveDateTime) -> NaiveDate {
    token
        .map(str::trim)
        .filter(|token| is_month_token(token))
        .and_then(|token| NaiveDate::parse_from_str(&format!("{token}-01"), "%Y-%m-%d").ok())
        .unwrap_or_else(|| month_bounds(now.date()).0.date())
}

fn is_month_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 7
        && bytes[4] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || b.is_ascii_digit())
}
