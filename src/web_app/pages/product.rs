// web_app/pages/product.rs - Single product page (/products/:id)

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use crate::web_app::components::{ErrorDisplay, Loading, ProductDetail};
use crate::web_app::server_fns::get_product;

/// Parse the `:id` route segment
pub fn parse_product_id(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|id| id.parse::<u32>().ok())
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.with(|p| parse_product_id(p.get("id").as_deref()));

    let product = Resource::new(product_id, |id| async move {
        match id {
            Some(id) => get_product(id).await.map(Some),
            None => Ok(None),
        }
    });

    view! {
        <div class="container mx-auto px-4 py-8 space-y-6">
            <A href="/">"← Back to products"</A>

            <Suspense fallback=move || view! { <Loading message="Loading product..." /> }>
                {move || product.get().map(|result| match result {
                    Ok(Some(p)) => view! { <ProductDetail product=p /> }.into_any(),
                    Ok(None) => view! { <ErrorDisplay error="Unknown product".to_string() /> }.into_any(),
                    Err(_) => view! { <ErrorDisplay error="Error loading product".to_string() /> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id(Some("12")), Some(12));
        assert_eq!(parse_product_id(Some("abc")), None);
        assert_eq!(parse_product_id(Some("-1")), None);
        assert_eq!(parse_product_id(None), None);
    }
}
