// web_app/catalog/page_window.rs - Page-number window and results summary
//
// Everything the pagination controls need, computed without a UI runtime.

use std::ops::RangeInclusive;

/// Maximum number of page-number buttons shown at once
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Number of pages needed for `item_count` items
pub fn total_pages(item_count: usize, items_per_page: usize) -> usize {
    item_count.div_ceil(items_per_page.max(1))
}

/// Sliding window of page numbers centered on `current_page`.
///
/// Clamped to `1..=total_pages` and shifted near either edge so it always
/// holds `min(MAX_VISIBLE_PAGES, total_pages)` pages. Empty when there are
/// no pages.
pub fn page_window(current_page: usize, total_pages: usize) -> RangeInclusive<usize> {
    let mut start = current_page.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = total_pages.min(start + MAX_VISIBLE_PAGES - 1);

    if end + 1 < start + MAX_VISIBLE_PAGES {
        start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }

    start..=end
}

/// State of the pagination bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageControls {
    pub current_page: usize,
    pub total_pages: usize,
    pub pages: Vec<usize>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl PageControls {
    /// Controls for the given position, or `None` when there is at most one page.
    pub fn new(current_page: usize, total_pages: usize) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }

        Some(Self {
            current_page,
            total_pages,
            pages: page_window(current_page, total_pages).collect(),
            prev_disabled: current_page == 1,
            next_disabled: current_page == total_pages,
        })
    }
}

/// 1-indexed inclusive range of items shown, e.g. `(7, 12)` for page 2 of 6.
///
/// `None` when nothing matches.
pub fn showing_range(current_page: usize, items_per_page: usize, item_count: usize) -> Option<(usize, usize)> {
    if item_count == 0 {
        return None;
    }
    let start = current_page.saturating_sub(1) * items_per_page + 1;
    let end = (current_page * items_per_page).min(item_count);
    Some((start, end))
}
