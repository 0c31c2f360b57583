// web_app/api/error.rs - Errors raised while talking to the product API

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsApiError {
    #[error("request to product API failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("product API returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("could not decode product API response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("invalid product source configuration: {0}")]
    Config(String),
}
