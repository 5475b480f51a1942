use chrono::{Datelike, Days, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// Source of "now" for anything that defaults to the current month.
///
/// Reports resolve against the server's local wall clock; tests swap in a
/// fixed instant.
pub type Clock = fn() -> NaiveDateTime;

/// Current local wall-clock time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Format a local timestamp the way the report endpoints accept it back
pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// First and last instant of the calendar month containing `day`.
///
/// The month starts at 00:00:00 on day 1 and ends at 23:59:59 on its last day.
pub fn month_bounds(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let first = day - Days::new(u64::from(day.day0()));
    let start = first.and_time(NaiveTime::MIN);
    let end = first
        .checked_add_months(Months::new(1))
        .map(|next| next.and_time(NaiveTime::MIN) - Duration::seconds(1))
        .unwrap_or(start);

    (start, end)
}
