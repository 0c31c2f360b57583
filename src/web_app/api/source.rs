// web_app/api/source.rs - Process-wide product API client
//
// The server binary builds one client at startup; server functions pick it
// up from here when it is not in the Leptos context.

use std::sync::{Mutex, OnceLock, PoisonError};

use super::config::SourceConfig;
use super::error::ProductsApiError;
use super::products::ProductsClient;

static CLIENT: OnceLock<ProductsClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<ProductsClient>> = Mutex::new(None);

/// Initialize the global product client
pub fn init_client(client: ProductsClient) {
    tracing::info!("Initializing global product client for {}", client.base_url());
    if CLIENT.set(client).is_err() {
        tracing::warn!("Product client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: ProductsClient) {
    let mut guard = TEST_CLIENT_OVERRIDE.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(client);
}

/// Get the global product client
pub fn get_client() -> Option<ProductsClient> {
    {
        let guard = TEST_CLIENT_OVERRIDE.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Global product client is empty!");
    }
    client
}

/// Build a client from `PRODUCTS_API_URL` / `PRODUCTS_API_TIMEOUT_SECS`
pub fn create_client() -> Result<ProductsClient, ProductsApiError> {
    let config = SourceConfig::from_env()?;
    ProductsClient::new(&config)
}
