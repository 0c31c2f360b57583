// web_app/pages/catalog.rs - Product catalog page
//
// Owns the only catalog state. Children receive read-only signals plus
// callbacks; every callback funnels into `CatalogState::update`, and
// everything rendered is derived from the fetched list and that state.

use leptos::prelude::*;
use crate::web_app::catalog::{CatalogAction, CatalogState, CatalogView, ProductFeed};
use crate::web_app::components::*;
use crate::web_app::server_fns::{get_products, FETCH_FAILURE_MESSAGE};

/// Shown when an active filter matches nothing
pub const NO_RESULTS_MESSAGE: &str = "No products found";

/// Main catalog page component
#[component]
pub fn CatalogPage() -> impl IntoView {
    // Fetched once per mount
    let products = Resource::new(|| (), |_| async move { get_products().await });
    let feed = Signal::derive(move || ProductFeed::from_fetch(products.get()));

    let state = RwSignal::new(CatalogState::default());

    let catalog = Signal::derive(move || {
        let feed = feed.get();
        state.with(|s| CatalogView::derive(feed.products(), s))
    });

    let dispatch = move |action: CatalogAction| {
        let feed = feed.get_untracked();
        state.update(|s| *s = std::mem::take(s).update(action, feed.products()));
    };

    let on_search_change = Callback::new(move |term: String| {
        dispatch(CatalogAction::SearchChanged(term));
    });
    let on_category_change = Callback::new(move |category: Option<String>| {
        dispatch(CatalogAction::CategoryChanged(category));
    });
    let on_items_per_page_change = Callback::new(move |n: usize| {
        dispatch(CatalogAction::ItemsPerPageChanged(n));
    });
    let on_page_change = Callback::new(move |page: usize| {
        dispatch(CatalogAction::PageRequested(page));
    });
    let on_clear = Callback::new(move |()| {
        dispatch(CatalogAction::ClearFilters);
    });

    // Read-only values handed to the presentation components
    let search_term = Signal::derive(move || state.with(|s| s.filter.search_term.clone()));
    let selected_category = Signal::derive(move || state.with(|s| s.filter.selected_category.clone()));
    let items_per_page = Signal::derive(move || catalog.get().items_per_page);
    let categories = Signal::derive(move || catalog.get().categories);
    let current_page_slice = Signal::derive(move || catalog.get().page);
    let controls = Signal::derive(move || catalog.get().controls());
    let showing = Signal::derive(move || catalog.get().showing());
    let filtered_count = Signal::derive(move || catalog.get().filtered.len());
    let no_results = Signal::derive(move || catalog.get().no_results());

    view! {
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold text-center mb-8">"Product List"</h1>

            <Suspense fallback=move || view! { <Loading /> }>
                {move || match feed.get() {
                    ProductFeed::Loading => view! { <Loading /> }.into_any(),
                    ProductFeed::Failed => view! {
                        <ErrorDisplay error=FETCH_FAILURE_MESSAGE.to_string() />
                    }.into_any(),
                    ProductFeed::Loaded(_) => view! {
                        <FilterBar
                            search_term=search_term
                            categories=categories
                            selected_category=selected_category
                            items_per_page=items_per_page
                            on_search_change=on_search_change
                            on_category_change=on_category_change
                            on_items_per_page_change=on_items_per_page_change
                            on_clear=on_clear
                        />

                        <ResultsSummary showing=showing total=filtered_count />

                        <ProductGrid products=current_page_slice />

                        <Show when=move || no_results.get()>
                            <div class="text-center py-8 text-gray-500">{NO_RESULTS_MESSAGE}</div>
                        </Show>

                        <Pagination controls=controls on_page_change=on_page_change />
                    }.into_any(),
                }}
            </Suspense>
        </div>
    }
}
