use proptest::prelude::*;
use reporting::reports::models::PageRequest;
use reporting::reports::services::link_builder::{LinkBuilder, REPORTING_PATH};
use reporting::reports::services::page_window::{
    total_pages_by_days, total_pages_by_records, window_len,
};

/// Property-based tests for page counts and navigation links
///
/// Validates:
/// - Range reports round page counts up, monthly listings round down
/// - Both never report fewer than one page
/// - next exists iff total_page > 1, prev iff page > 1 as well

proptest! {
    #[test]
    fn test_pages_by_days_is_ceiling(total_days in 0u64..10_000, limit in 1u32..500) {
        let pages = total_pages_by_days(total_days, limit);
        let limit = u64::from(limit);

        prop_assert!(pages >= 1);
        if total_days > 0 {
            prop_assert!(u64::from(pages) * limit >= total_days);
            prop_assert!(u64::from(pages - 1) * limit < total_days);
        }
    }

    #[test]
    fn test_pages_by_records_is_floor(count in 0u64..10_000, limit in 1u32..500) {
        let pages = total_pages_by_records(count, limit);
        let expected = (count / u64::from(limit)).max(1);

        prop_assert_eq!(u64::from(pages), expected);
        prop_assert!(total_pages_by_days(count, limit) >= pages);
    }

    #[test]
    fn test_window_len_never_exceeds_limit(total in 0u64..1_000, limit in 1u32..100, page in 1u32..50) {
        let len = window_len(total, PageRequest::new(limit, page));
        prop_assert!(len <= u64::from(limit));
        prop_assert!(len <= total);
    }

    #[test]
    fn test_link_presence(
        outlet_id in 0u64..5,
        limit in 1u32..50,
        page in 1u32..20,
        total_page in 1u32..20,
    ) {
        let builder = LinkBuilder::new("http://localhost:3000").unwrap();
        let links = builder.navigation(REPORTING_PATH, outlet_id, PageRequest::new(limit, page), total_page);

        prop_assert_eq!(links.next.is_some(), total_page > 1);
        prop_assert_eq!(links.previous.is_some(), page > 1 && total_page > 1);
        prop_assert_eq!(links.current.contains("outlet_id="), outlet_id > 0);
        let expected_suffix = format!("page={}", page);
        prop_assert!(links.current.ends_with(&expected_suffix));
    }
}
