// tests/products_api_tests.rs
// Upstream product API client against a mock HTTP server

use httpmock::prelude::*;
use product_catalog::fixtures::products::StoreCatalog;
use product_catalog::fixtures::TestCatalog;
use product_catalog::web_app::api::{ProductsApiError, ProductsClient, SourceConfig};
use rust_decimal::Decimal;

fn client_for(server: &MockServer) -> anyhow::Result<ProductsClient> {
    let config = SourceConfig {
        base_url: server.base_url(),
        timeout: Some(std::time::Duration::from_secs(5)),
    };
    Ok(ProductsClient::new(&config)?)
}

#[tokio::test]
async fn test_fetch_products_parses_catalog() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200)
                .header("content-type", "application/json")
                .body(StoreCatalog::catalog_json());
        })
        .await;

    let products = client_for(&server)?.fetch_products().await?;
    mock.assert_async().await;

    assert_eq!(products.len(), 13);
    assert_eq!(products, StoreCatalog::products());
    assert_eq!(products[0].title, "Fjallraven Foldsack No. 1 Backpack");
    assert_eq!(products[4].price, Decimal::new(695, 0));
    assert_eq!(products[4].price_display(), "$695.00");
    assert_eq!(products[12].category(), Some("electronics"));
    Ok(())
}

#[tokio::test]
async fn test_fetch_product_by_id() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/products/3");
            then.status(200).json_body(serde_json::json!({
                "id": 3,
                "title": "Mens Cotton Jacket",
                "price": 55.99,
                "image": "https://example.com/3.jpg"
            }));
        })
        .await;

    let product = client_for(&server)?.fetch_product(3).await?;
    mock.assert_async().await;

    assert_eq!(product.id, 3);
    assert_eq!(product.price, Decimal::new(5599, 2));
    assert!(product.category.is_none());
    assert!(product.rating.is_none());
    Ok(())
}

#[tokio::test]
async fn test_error_status_is_reported() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(500).body("upstream down");
        })
        .await;

    let result = client_for(&server)?.fetch_products().await;
    match result {
        Err(ProductsApiError::Status { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/products"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"products": "not a list"}"#);
        })
        .await;

    let result = client_for(&server)?.fetch_products().await;
    assert!(matches!(result, Err(ProductsApiError::Decode(_))), "got {:?}", result);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_a_request_error() -> anyhow::Result<()> {
    let config = SourceConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout: Some(std::time::Duration::from_secs(2)),
    };
    let result = ProductsClient::new(&config)?.fetch_products().await;
    assert!(matches!(result, Err(ProductsApiError::Request(_))), "got {:?}", result);
    Ok(())
}
