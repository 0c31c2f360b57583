// web_app/api/mod.rs - Upstream product API (SSR only)
//
// - config.rs: SourceConfig read from the environment
// - error.rs: ProductsApiError
// - products.rs: ProductsClient, the reqwest-backed fetcher
// - source.rs: process-wide client used by the server functions

pub mod config;
pub mod error;
pub mod products;
pub mod source;

pub use config::SourceConfig;
pub use error::ProductsApiError;
pub use products::ProductsClient;
