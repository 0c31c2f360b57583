// web_app/components/filters.rs - Filter controls
//
// - SearchBar: free-text title search, updated on every keystroke
// - CategorySelect: "All Categories" plus the categories in the product list
// - PageSizeSelect: items per page
// - FilterBar: all of the above plus "Clear filters"

use leptos::prelude::*;
use crate::web_app::catalog::{FilterCriteria, PAGE_SIZE_OPTIONS};
use super::common::{SelectString, TextInput};

/// Label of the catch-all category option
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// Search bar component
#[component]
pub fn SearchBar(
    /// Current search term
    search_term: Signal<String>,
    /// Called with the new term on every keystroke
    on_search_change: Callback<String>,
) -> impl IntoView {
    view! {
        <TextInput
            value=search_term
            on_input=on_search_change
            placeholder="Search products..."
            input_type="search"
            class="flex-1"
        />
    }
}

/// `(value, label)` pairs for the category selector; `""` means all.
pub fn category_options(categories: &[String]) -> Vec<(String, String)> {
    std::iter::once((String::new(), ALL_CATEGORIES_LABEL.to_string()))
        .chain(categories.iter().map(|c| (c.clone(), c.clone())))
        .collect()
}

/// Category selector
#[component]
pub fn CategorySelect(
    /// Categories present in the product list
    categories: Signal<Vec<String>>,
    /// Selected category, `None` for all
    selected_category: Signal<Option<String>>,
    /// Called with the new selection
    on_category_change: Callback<Option<String>>,
) -> impl IntoView {
    let options = Signal::derive(move || category_options(&categories.get()));
    let value = Signal::derive(move || selected_category.get().unwrap_or_default());
    let on_change = Callback::new(move |raw: String| {
        on_category_change.run(FilterCriteria::category_from_input(&raw));
    });

    view! {
        <SelectString value=value options=options on_change=on_change class="md:w-64" />
    }
}

/// Page size selector
#[component]
pub fn PageSizeSelect(
    /// Current page size
    items_per_page: Signal<usize>,
    /// Called with the new page size
    on_items_per_page_change: Callback<usize>,
) -> impl IntoView {
    let options = Signal::derive(|| {
        PAGE_SIZE_OPTIONS
            .iter()
            .map(|n| (n.to_string(), format!("{} per page", n)))
            .collect::<Vec<_>>()
    });
    let value = Signal::derive(move || items_per_page.get().to_string());
    let on_change = Callback::new(move |raw: String| {
        if let Ok(n) = raw.parse::<usize>() {
            on_items_per_page_change.run(n);
        }
    });

    view! {
        <SelectString value=value options=options on_change=on_change class="md:w-40" />
    }
}

/// Complete filter bar
#[component]
pub fn FilterBar(
    search_term: Signal<String>,
    categories: Signal<Vec<String>>,
    selected_category: Signal<Option<String>>,
    items_per_page: Signal<usize>,
    on_search_change: Callback<String>,
    on_category_change: Callback<Option<String>>,
    on_items_per_page_change: Callback<usize>,
    /// Reset search and category
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="mb-6 flex flex-col md:flex-row gap-4">
            <SearchBar search_term=search_term on_search_change=on_search_change />
            <CategorySelect
                categories=categories
                selected_category=selected_category
                on_category_change=on_category_change
            />
            <PageSizeSelect
                items_per_page=items_per_page
                on_items_per_page_change=on_items_per_page_change
            />
            <button
                type="button"
                class="px-4 py-2 text-sm font-semibold text-blue-600 hover:text-blue-800 hover:underline"
                on:click=move |_| on_clear.run(())
            >
                "Clear filters"
            </button>
        </div>
    }
}
