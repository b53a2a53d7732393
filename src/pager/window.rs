//! Pure page math: page counts, clamping and window bounds.

use std::ops::Range;

/// Number of pages needed for `item_count` items. Never less than 1.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

/// Clamps any requested page (including zero and negatives) into `1..=total_pages`.
pub fn clamp_page(page: i64, total_pages: usize) -> usize {
    let max_page = total_pages.max(1);
    if page < 1 {
        return 1;
    }
    usize::try_from(page).map_or(max_page, |p| p.min(max_page))
}

/// Index range of the window for a one-based `page`.
///
/// The range is always within `0..total_items`, so slicing with it cannot panic.
pub fn page_window(total_items: usize, page_size: usize, page: usize) -> Range<usize> {
    let size = page_size.max(1);
    let start = page
        .saturating_sub(1)
        .saturating_mul(size)
        .min(total_items);
    let end = start.saturating_add(size).min(total_items);
    start..end
}
