use crate::modules::reports::models::{PageRequest, Pagination};

/// Pages needed to show `total_days` calendar days, rounding up, never below 1
pub fn total_pages_by_days(total_days: u64, limit: u32) -> u32 {
    clamp_pages(total_days.div_ceil(u64::from(limit.max(1))))
}

/// Pages reported for the monthly listing.
///
/// This rounds *down*: a trailing partial page is not counted, unlike
/// [`total_pages_by_days`].
pub fn total_pages_by_records(record_count: u64, limit: u32) -> u32 {
    clamp_pages(record_count / u64::from(limit.max(1)))
}

/// Number of ordinals of a `total` long sequence that fall on the requested page
pub fn window_len(total: u64, paging: PageRequest) -> u64 {
    total
        .saturating_sub(paging.offset())
        .min(u64::from(paging.limit()))
}

pub fn pagination(paging: PageRequest, total_page: u32) -> Pagination {
    Pagination {
        limit: paging.limit(),
        page: paging.page(),
        total_page,
    }
}

fn clamp_pages(pages: u64) -> u32 {
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}
