// web_app/api/products.rs - Upstream product API client
//
// Two read-only endpoints: the full list and a single product by id.
// No retries: a failed request is reported once and left to the caller.

use serde::de::DeserializeOwned;

use super::config::SourceConfig;
use super::error::ProductsApiError;
use crate::web_app::model::Product;

#[derive(Clone, Debug)]
pub struct ProductsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProductsClient {
    pub fn new(config: &SourceConfig) -> Result<Self, ProductsApiError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ProductsApiError::Request)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /products`
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ProductsApiError> {
        self.get_json("/products").await
    }

    /// `GET /products/{id}`
    pub async fn fetch_product(&self, id: u32) -> Result<Product, ProductsApiError> {
        self.get_json(&format!("/products/{}", id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ProductsApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ProductsApiError::Request)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Product API answered {} for {}", status, url);
            return Err(ProductsApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response.json::<T>().await.map_err(ProductsApiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = SourceConfig {
            base_url: "http://localhost:9000/".to_string(),
            timeout: None,
        };
        let client = ProductsClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
    }
}
