// tests/server_fn_tests.rs
// Test suite for Leptos server functions
//
// The client override is process-global, so everything runs in one test.

use httpmock::prelude::*;
use product_catalog::fixtures::products::StoreCatalog;
use product_catalog::fixtures::TestCatalog;
use product_catalog::web_app::api::{source, ProductsClient, SourceConfig};
use product_catalog::web_app::server_fns::*;

fn client_for(server: &MockServer) -> anyhow::Result<ProductsClient> {
    let config = SourceConfig {
        base_url: server.base_url(),
        timeout: None,
    };
    Ok(ProductsClient::new(&config)?)
}

#[tokio::test]
async fn test_server_functions_comprehensive() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200)
                .header("content-type", "application/json")
                .body(StoreCatalog::catalog_json());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products/5");
            then.status(200).json_body(serde_json::json!({
                "id": 5,
                "title": "Legends Naga Gold & Silver Dragon Station Chain Bracelet",
                "price": 695,
                "image": "https://example.com/5.jpg",
                "category": "jewelery"
            }));
        })
        .await;
    source::set_test_client(client_for(&server)?);

    // 1. Test get_products
    println!("Testing get_products...");
    let products = get_products().await
        .map_err(|e| anyhow::anyhow!("get_products failed: {}", e))?;
    assert_eq!(products.len(), 13);

    // 2. Test get_product
    println!("Testing get_product for id=5...");
    let product = get_product(5).await
        .map_err(|e| anyhow::anyhow!("get_product failed: {}", e))?;
    assert_eq!(product.id, 5);
    assert_eq!(product.category(), Some("jewelery"));

    // 3. Upstream failure surfaces only the generic message
    println!("Testing upstream failure...");
    let failing = MockServer::start_async().await;
    failing
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(503).body("maintenance");
        })
        .await;
    source::set_test_client(client_for(&failing)?);

    let err = get_products().await.expect_err("503 must fail the fetch");
    let message = err.to_string();
    assert!(message.contains(FETCH_FAILURE_MESSAGE), "unexpected error: {}", message);
    assert!(!message.contains("503"), "status leaked to the client: {}", message);

    // 4. Unknown product
    let err = get_product(99).await.expect_err("unmocked id must fail");
    assert!(err.to_string().contains(FETCH_FAILURE_MESSAGE));

    Ok(())
}
