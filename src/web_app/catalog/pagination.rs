// web_app/catalog/pagination.rs - Pagination state and its reducer
//
// Pagination is a plain value owned by the page that renders the catalog.
// It changes only through `PaginationAction`, and every transition returns a
// new value instead of mutating shared state.

use serde::{Deserialize, Serialize};

/// Page size used when the catalog first mounts
pub const DEFAULT_ITEMS_PER_PAGE: usize = 6;

/// Page sizes offered by the page-size selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [3, 6, 9, 12];

/// Current page (1-indexed) and page size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// The three transitions pagination supports
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaginationAction {
    SetCurrentPage(usize),
    SetItemsPerPage(usize),
    Reset,
}

impl PaginationState {
    /// Apply a single transition
    pub fn apply(self, action: PaginationAction) -> Self {
        match action {
            PaginationAction::SetCurrentPage(page) => self.set_current_page(page),
            PaginationAction::SetItemsPerPage(n) => self.set_items_per_page(n),
            PaginationAction::Reset => self.reset_pagination(),
        }
    }

    /// Jump to `page` without any bounds check.
    pub fn set_current_page(self, page: usize) -> Self {
        Self {
            current_page: page,
            ..self
        }
    }

    /// Change the page size and go back to the first page.
    ///
    /// A size of zero is treated as one.
    pub fn set_items_per_page(self, n: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: n.max(1),
        }
    }

    /// Go back to the first page, keeping the page size.
    pub fn reset_pagination(self) -> Self {
        Self {
            current_page: 1,
            ..self
        }
    }

    /// Index of the first item on the current page
    pub fn offset(&self) -> usize {
        self.current_page.saturating_sub(1) * self.items_per_page
    }
}
