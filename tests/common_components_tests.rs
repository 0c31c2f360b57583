use leptos::prelude::*;
use product_catalog::fixtures::products::{product, StoreCatalog};
use product_catalog::fixtures::TestCatalog;
use product_catalog::web_app::catalog::PageControls;
use product_catalog::web_app::components::*;
use rust_decimal::Decimal;

// Helper to create a runtime for tests
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let owner = Owner::new();
    owner.with(f);
}

#[test]
fn test_loading_component_instantiation() {
    with_runtime(|| {
        let _ = Loading(LoadingProps {
            message: "Loading...",
        });

        let _ = Loading(LoadingProps {
            message: "Loading product...",
        });
    });
}

#[test]
fn test_error_display_instantiation() {
    with_runtime(|| {
        let _ = ErrorDisplay(ErrorDisplayProps {
            error: "Error loading products".to_string(),
        });
    });
}

#[test]
fn test_star_rating_instantiation() {
    with_runtime(|| {
        let _ = StarRating(StarRatingProps { rating: 0.0, count: None });
        let _ = StarRating(StarRatingProps { rating: 3.9, count: Some(120) });
        let _ = StarRating(StarRatingProps { rating: 5.0, count: Some(0) });
    });
}

#[test]
fn test_price_display_instantiation() {
    with_runtime(|| {
        let _ = PriceDisplay(PriceDisplayProps {
            price: Decimal::new(10995, 2),
            highlight: false,
        });
        let _ = PriceDisplay(PriceDisplayProps {
            price: Decimal::new(695, 0),
            highlight: true,
        });
    });
}

#[test]
fn test_product_components_instantiation() {
    with_runtime(|| {
        for p in StoreCatalog::products() {
            let _ = ProductCard(ProductCardProps { product: p.clone() });
            let _ = ProductDetail(ProductDetailProps { product: p });
        }

        let bare = product(99, "No extras", None);
        let _ = ProductCard(ProductCardProps { product: bare });
    });
}

#[test]
fn test_filter_bar_instantiation() {
    with_runtime(|| {
        let _ = FilterBar(FilterBarProps {
            search_term: Signal::derive(String::new),
            categories: Signal::derive(|| vec!["electronics".to_string(), "jewelery".to_string()]),
            selected_category: Signal::derive(|| None),
            items_per_page: Signal::derive(|| 6),
            on_search_change: Callback::new(|_: String| {}),
            on_category_change: Callback::new(|_: Option<String>| {}),
            on_items_per_page_change: Callback::new(|_: usize| {}),
            on_clear: Callback::new(|_: ()| {}),
        });
    });
}

#[test]
fn test_pagination_instantiation() {
    with_runtime(|| {
        let _ = Pagination(PaginationProps {
            controls: Signal::derive(|| PageControls::new(2, 3)),
            on_page_change: Callback::new(|_: usize| {}),
        });
        let _ = Pagination(PaginationProps {
            controls: Signal::derive(|| None),
            on_page_change: Callback::new(|_: usize| {}),
        });
        let _ = ResultsSummary(ResultsSummaryProps {
            showing: Signal::derive(|| Some((7, 12))),
            total: Signal::derive(|| 13),
        });
    });
}

#[test]
fn test_category_options_lead_with_all() {
    let options = category_options(&["electronics".to_string()]);
    assert_eq!(options[0], (String::new(), ALL_CATEGORIES_LABEL.to_string()));
    assert_eq!(options[1], ("electronics".to_string(), "electronics".to_string()));
}
