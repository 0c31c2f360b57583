// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{CatalogPage, ProductPage};

pub const APP_TITLE: &str = "Product Catalog";

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Router with the catalog and product routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Browse, search and filter the product catalog" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/product_catalog.css" />

        <Router>
            <main class="min-h-screen bg-gray-50">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CatalogPage />
                    <Route path=path!("/products") view=CatalogPage />
                    <Route path=path!("/products/:id") view=ProductPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Back to products"
                </a>
            </div>
        </div>
    }
}
