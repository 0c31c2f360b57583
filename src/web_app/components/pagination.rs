// web_app/components/pagination.rs - Page navigation and results summary

use leptos::prelude::*;
use crate::web_app::catalog::PageControls;

const NAV_BUTTON_CLASS: &str = "px-4 py-2 bg-gray-200 rounded disabled:opacity-50 hover:bg-gray-300";

/// Class for a page-number button
pub fn page_button_class(active: bool) -> &'static str {
    if active {
        "px-3 py-2 mx-1 rounded bg-blue-500 text-white"
    } else {
        "px-3 py-2 mx-1 rounded bg-gray-200 hover:bg-gray-300"
    }
}

/// "Showing 7-12 of 13 products"
pub fn summary_text(first: usize, last: usize, total: usize) -> String {
    format!("Showing {}-{} of {} products", first, last, total)
}

/// Pagination component
///
/// Previous, a window of up to five page numbers, Next. Renders nothing
/// when there is a single page. Out-of-range requests are ignored upstream,
/// so Previous on page 1 and Next on the last page are harmless.
#[component]
pub fn Pagination(
    /// Current controls, `None` when there is at most one page
    controls: Signal<Option<PageControls>>,
    /// Called with the requested page number
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let bar = move || {
        controls.get().map(|PageControls { current_page, pages, prev_disabled, next_disabled, .. }| {
            view! {
                <nav class="flex justify-center items-center space-x-2 mt-8" aria-label="Pagination">
                    <button
                        type="button"
                        class=NAV_BUTTON_CLASS
                        disabled=prev_disabled
                        on:click=move |_| on_page_change.run(current_page.saturating_sub(1))
                    >
                        "Previous"
                    </button>

                    {pages.into_iter().map(|page| view! {
                        <button
                            type="button"
                            class=page_button_class(page == current_page)
                            on:click=move |_| on_page_change.run(page)
                        >
                            {page}
                        </button>
                    }).collect_view()}

                    <button
                        type="button"
                        class=NAV_BUTTON_CLASS
                        disabled=next_disabled
                        on:click=move |_| on_page_change.run(current_page + 1)
                    >
                        "Next"
                    </button>
                </nav>
            }
        })
    };

    view! { {bar} }
}

/// Results summary line, hidden when nothing matches
#[component]
pub fn ResultsSummary(
    /// `(first, last)` item numbers on the current page
    showing: Signal<Option<(usize, usize)>>,
    /// Number of products after filtering
    total: Signal<usize>,
) -> impl IntoView {
    view! {
        {move || showing.get().map(|(first, last)| view! {
            <div class="mb-4 text-center text-gray-600">
                {summary_text(first, last, total.get())}
            </div>
        })}
    }
}
