// web_app/catalog/reconcile.rs - Filter + pagination reconciliation
//
// `CatalogState` is the single value the catalog page owns. Every user
// action goes through `CatalogState::update`, which also applies the
// pagination reset that follows a filter change and the out-of-bounds clamp.
// `CatalogView::derive` recomputes everything the page renders from the
// current product list and state, so a render pass never sees a page number
// that is out of range for the data it is rendering.

use serde::{Deserialize, Serialize};

use super::filter::{extract_categories, filter_products, FilterCriteria};
use super::page_window::{showing_range, total_pages, PageControls};
use super::pagination::{PaginationAction, PaginationState};
use crate::web_app::model::Product;

/// Filter criteria plus pagination
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogState {
    pub filter: FilterCriteria,
    pub pagination: PaginationState,
}

/// Everything the user can do to the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogAction {
    SearchChanged(String),
    CategoryChanged(Option<String>),
    PageRequested(usize),
    ItemsPerPageChanged(usize),
    ClearFilters,
}

impl CatalogState {
    /// Apply `action` against the current product list and settle the result.
    pub fn update(self, action: CatalogAction, products: &[Product]) -> Self {
        let next = match action {
            CatalogAction::SearchChanged(term) => {
                let filter = FilterCriteria {
                    search_term: term,
                    ..self.filter.clone()
                };
                self.with_filter(filter)
            }
            CatalogAction::CategoryChanged(category) => {
                let filter = FilterCriteria {
                    selected_category: category.filter(|c| !c.is_empty()),
                    ..self.filter.clone()
                };
                self.with_filter(filter)
            }
            CatalogAction::PageRequested(page) => {
                let total = self.total_pages(products);
                Self {
                    pagination: handle_page_change(self.pagination, page, total),
                    ..self
                }
            }
            CatalogAction::ItemsPerPageChanged(n) => Self {
                pagination: self.pagination.apply(PaginationAction::SetItemsPerPage(n)),
                ..self
            },
            CatalogAction::ClearFilters => Self {
                filter: FilterCriteria::default(),
                pagination: self.pagination.apply(PaginationAction::Reset),
            },
        };
        next.settle(products)
    }

    /// Replace the filter; pagination resets only if the filter really changed.
    fn with_filter(self, filter: FilterCriteria) -> Self {
        if filter == self.filter {
            return self;
        }
        Self {
            filter,
            pagination: self.pagination.apply(PaginationAction::Reset),
        }
    }

    /// Pages in the filtered result for this state
    pub fn total_pages(&self, products: &[Product]) -> usize {
        total_pages(
            filter_products(products, &self.filter).len(),
            self.pagination.items_per_page,
        )
    }

    /// Clamp the current page into `1..=max(1, total_pages)`.
    pub fn settle(self, products: &[Product]) -> Self {
        let total = self.total_pages(products);
        Self {
            pagination: clamp_page(self.pagination, total),
            ..self
        }
    }
}

/// Navigate to `page` if it exists; otherwise leave pagination untouched.
pub fn handle_page_change(pagination: PaginationState, page: usize, total_pages: usize) -> PaginationState {
    if (1..=total_pages).contains(&page) {
        pagination.apply(PaginationAction::SetCurrentPage(page))
    } else {
        pagination
    }
}

/// Pull an out-of-range current page back onto the last page (or page 1).
pub fn clamp_page(pagination: PaginationState, total_pages: usize) -> PaginationState {
    let last = total_pages.max(1);
    if pagination.current_page > last {
        pagination.apply(PaginationAction::SetCurrentPage(last))
    } else if pagination.current_page == 0 {
        pagination.apply(PaginationAction::SetCurrentPage(1))
    } else {
        pagination
    }
}

/// Products on `current_page`; empty when the page is past the end.
pub fn page_slice<T>(items: &[T], current_page: usize, items_per_page: usize) -> &[T] {
    let start = current_page.saturating_sub(1).saturating_mul(items_per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(items_per_page).min(items.len());
    &items[start..end]
}

/// Read-only values the presentation layer renders
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogView {
    pub categories: Vec<String>,
    pub filtered: Vec<Product>,
    pub total_pages: usize,
    pub current_page: usize,
    pub items_per_page: usize,
    pub page: Vec<Product>,
    pub filter_active: bool,
}

impl CatalogView {
    /// Derive the visible page from the product list and state.
    pub fn derive(products: &[Product], state: &CatalogState) -> Self {
        let filtered = filter_products(products, &state.filter);
        let total = total_pages(filtered.len(), state.pagination.items_per_page);
        let pagination = clamp_page(state.pagination, total);
        let page = page_slice(&filtered, pagination.current_page, pagination.items_per_page)
            .iter()
            .map(|p| (*p).clone())
            .collect();

        Self {
            categories: extract_categories(products),
            filtered: filtered.into_iter().cloned().collect(),
            total_pages: total,
            current_page: pagination.current_page,
            items_per_page: pagination.items_per_page,
            page,
            filter_active: state.filter.is_active(),
        }
    }

    /// Pagination bar, if more than one page exists
    pub fn controls(&self) -> Option<PageControls> {
        PageControls::new(self.current_page, self.total_pages)
    }

    /// `(first, last)` item numbers on this page
    pub fn showing(&self) -> Option<(usize, usize)> {
        showing_range(self.current_page, self.items_per_page, self.filtered.len())
    }

    /// An active filter that matched nothing
    pub fn no_results(&self) -> bool {
        self.filtered.is_empty() && self.filter_active
    }
}
