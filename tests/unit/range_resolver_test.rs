use chrono::{NaiveDate, NaiveDateTime};
use reporting::reports::services::range_resolver::{current_month, resolve_month, resolve_range};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn test_missing_range_is_current_month() {
    let now = at(2024, 1, 20, 14, 0, 0);
    let range = resolve_range(None, None, now);

    assert_eq!(range.start, at(2024, 1, 1, 0, 0, 0));
    assert_eq!(range.end, at(2024, 1, 31, 23, 59, 59));
    assert_eq!(range.total_days(), 31);
}

#[test]
fn test_fallback_is_deterministic() {
    let now = at(2023, 11, 5, 0, 0, 1);
    let reversed = resolve_range(Some(at(2023, 6, 2, 0, 0, 0)), Some(at(2023, 6, 1, 0, 0, 0)), now);
    let missing_end = resolve_range(Some(at(2023, 6, 2, 0, 0, 0)), None, now);

    assert_eq!(reversed, current_month(now));
    assert_eq!(missing_end, current_month(now));
    assert_eq!(reversed.end, at(2023, 11, 30, 23, 59, 59));
}

#[test]
fn test_fallback_on_last_instant_of_year() {
    let now = at(2024, 12, 31, 23, 59, 59);
    let range = resolve_range(None, None, now);

    assert_eq!(range.start, at(2024, 12, 1, 0, 0, 0));
    assert_eq!(range.end, now);
}

#[test]
fn test_month_token() {
    let now = at(2024, 1, 20, 14, 0, 0);

    assert_eq!(
        resolve_month(Some("2023-11"), now),
        NaiveDate::from_ymd_opt(2023, 11, 1).unwrap()
    );
    assert_eq!(
        resolve_month(Some("2023/11"), now),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    );
}
