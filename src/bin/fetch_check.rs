// Fetch the product list once and print what the catalog would show.
//
// Usage: cargo run --bin fetch_check --features ssr

use anyhow::Result;
use product_catalog::web_app::api::source;
use product_catalog::web_app::catalog::{
    extract_categories, total_pages, DEFAULT_ITEMS_PER_PAGE,
};

fn main() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    dotenv::dotenv().ok();

    let client = source::create_client()?;
    println!("Fetching products from {}...", client.base_url());

    let products = client.fetch_products().await?;
    println!("✓ Fetched {} products", products.len());

    let categories = extract_categories(&products);
    println!("\nCategories ({}):", categories.len());
    for category in &categories {
        let count = products
            .iter()
            .filter(|p| p.category() == Some(category.as_str()))
            .count();
        println!("  - {} ({})", category, count);
    }

    println!(
        "\nPages at {} per page: {}",
        DEFAULT_ITEMS_PER_PAGE,
        total_pages(products.len(), DEFAULT_ITEMS_PER_PAGE)
    );

    if let Some(first) = products.first() {
        println!("First product: #{} {} ({})", first.id, first.title, first.price_display());
    }

    Ok(())
}
