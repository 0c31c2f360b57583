// fixtures/mod.rs - Test fixtures module
//
// Reusable product data for unit tests, integration tests and the mock
// upstream server. A fixture catalog is the exact JSON body the upstream
// `GET /products` endpoint would return, so the same bytes exercise the
// HTTP client, the server functions and the catalog state machine.

pub mod products;

use crate::web_app::model::Product;

/// A catalog that can stand in for the upstream product API
pub trait TestCatalog {
    /// JSON array served as the body of `GET /products`
    fn catalog_json() -> &'static str;

    /// The same catalog, parsed
    fn products() -> Vec<Product> {
        serde_json::from_str(Self::catalog_json()).expect("fixture catalog must be valid JSON")
    }
}
