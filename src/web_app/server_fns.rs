// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro generates:
// - On server: The actual function, which calls the upstream product API
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::Product;

/// Message shown to the user for any failed fetch; the cause is only logged.
pub const FETCH_FAILURE_MESSAGE: &str = "Error loading products";

#[cfg(feature = "ssr")]
async fn client() -> Result<crate::web_app::api::ProductsClient, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use crate::web_app::api::{source, ProductsClient};

    // Context first (tests or manual wiring), then the global client
    if let Some(client) = use_context::<ProductsClient>() {
        return Ok(client);
    }

    if let Some(client) = source::get_client() {
        return Ok(client);
    }

    match extract::<HttpRequest>().await {
        Ok(req) => {
            if let Some(client) = req.app_data::<Data<ProductsClient>>() {
                return Ok(client.as_ref().clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("Product source not available"))
}

/// Fetch the full product list
#[server(GetProducts, "/api")]
pub async fn get_products() -> Result<Vec<Product>, ServerFnError> {
    let client = client().await?;

    match client.fetch_products().await {
        Ok(products) => {
            tracing::info!("Fetched {} products from {}", products.len(), client.base_url());
            Ok(products)
        }
        Err(e) => {
            tracing::error!("Product list fetch failed: {}", e);
            Err(ServerFnError::new(FETCH_FAILURE_MESSAGE))
        }
    }
}

/// Fetch a single product by id
#[server(GetProduct, "/api")]
pub async fn get_product(id: u32) -> Result<Product, ServerFnError> {
    let client = client().await?;

    client.fetch_product(id).await.map_err(|e| {
        tracing::error!("Product {} fetch failed: {}", id, e);
        ServerFnError::new(FETCH_FAILURE_MESSAGE)
    })
}
