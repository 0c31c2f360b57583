// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ProductCard: Grid card for the current page
// - ProductGrid: Grid layout for the current page
// - ProductDetail: Full product view on /products/:id

use leptos::prelude::*;
use leptos_router::components::A;
use crate::web_app::model::Product;
use super::common::{Badge, PriceDisplay, StarRating};

/// Longest description preview on a card, in characters
pub const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// Shorten `text` to `max_chars` characters, appending "..." when cut.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Link target for a product's detail page
pub fn product_href(id: u32) -> String {
    format!("/products/{}", id)
}

/// Product card for the results grid
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let href = product_href(product.id);
    let rating = product.rating;
    let preview = product
        .description
        .as_deref()
        .map(|d| truncate_description(d, DESCRIPTION_PREVIEW_CHARS));

    view! {
        <div class="bg-white rounded-lg shadow-md overflow-hidden hover:shadow-lg">
            <A href=href>
                <img src=product.image.clone() alt=product.title.clone() class="w-full h-48 object-cover" />
                <div class="p-4">
                    <h2 class="text-xl font-semibold mb-2">{product.title.clone()}</h2>
                    <PriceDisplay price=product.price />
                    {preview.map(|text| view! {
                        <p class="text-sm text-gray-500 mt-2">{text}</p>
                    })}
                    {product.category().map(str::to_string).map(|category| view! {
                        <p class="mt-1">
                            <Badge>{category}</Badge>
                        </p>
                    })}
                    {rating.map(|r| view! {
                        <div class="mt-2">
                            <StarRating rating=r.rate count=r.count />
                        </div>
                    })}
                </div>
            </A>
        </div>
    }
}

/// Grid of product cards for the current page
#[component]
pub fn ProductGrid(
    /// Products on the current page
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-8">
            <For
                each=move || products.get()
                key=|p| p.id
                children=move |product| view! { <ProductCard product=product /> }
            />
        </div>
    }
}

/// Product detail view
#[component]
pub fn ProductDetail(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let description = product.description.clone().unwrap_or_default();

    view! {
        <div class="flex flex-col md:flex-row gap-8 bg-white rounded-lg shadow-md p-6">
            <img
                src=product.image.clone()
                alt=product.title.clone()
                class="w-full md:w-1/3 object-contain max-h-96"
            />
            <div class="flex-1 space-y-4">
                <h1 class="text-3xl font-bold text-gray-900">{product.title.clone()}</h1>
                <PriceDisplay price=product.price highlight=true />
                {product.category().map(str::to_string).map(|category| view! {
                    <div><Badge variant="blue">{category}</Badge></div>
                })}
                {product.rating.map(|r| view! {
                    <StarRating rating=r.rate count=r.count />
                })}
                <p class="text-gray-600 leading-relaxed">{description}</p>
            </div>
        </div>
    }
}
