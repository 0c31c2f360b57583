// web_app/catalog/mod.rs - The catalog state machine
//
// Pure Rust, no UI dependencies. Compiled with or without the `ssr` and
// `hydrate` features so it can be tested on its own.
//
// - pagination.rs: PaginationState and its three transitions
// - filter.rs: FilterCriteria, category extraction, filtering
// - page_window.rs: total pages, page-number window, results summary
// - reconcile.rs: CatalogState::update and CatalogView::derive
// - source.rs: ProductFeed (loading / loaded / failed)

pub mod filter;
pub mod page_window;
pub mod pagination;
pub mod reconcile;
pub mod source;

pub use filter::{extract_categories, filter_products, FilterCriteria};
pub use page_window::{page_window, showing_range, total_pages, PageControls, MAX_VISIBLE_PAGES};
pub use pagination::{PaginationAction, PaginationState, DEFAULT_ITEMS_PER_PAGE, PAGE_SIZE_OPTIONS};
pub use reconcile::{clamp_page, handle_page_change, page_slice, CatalogAction, CatalogState, CatalogView};
pub use source::ProductFeed;
