// web_app/api/config.rs - Where the product list comes from
//
// Read once at startup. `.env` is loaded by the binaries before this runs.

use std::env;
use std::time::Duration;

use super::error::ProductsApiError;

pub const DEFAULT_PRODUCTS_API_URL: &str = "https://fakestoreapi.com";

pub const PRODUCTS_API_URL_VAR: &str = "PRODUCTS_API_URL";
pub const PRODUCTS_API_TIMEOUT_VAR: &str = "PRODUCTS_API_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    /// Base URL; `/products` is appended to it
    pub base_url: String,
    /// Request timeout, `None` for no timeout
    pub timeout: Option<Duration>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PRODUCTS_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl SourceConfig {
    /// Read `PRODUCTS_API_URL` and `PRODUCTS_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ProductsApiError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, with variables supplied by `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProductsApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(PRODUCTS_API_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_PRODUCTS_API_URL.to_string());

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ProductsApiError::Config(format!(
                "{} must be an http(s) URL, got '{}'",
                PRODUCTS_API_URL_VAR, base_url
            )));
        }

        let timeout = match lookup(PRODUCTS_API_TIMEOUT_VAR) {
            None => None,
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    ProductsApiError::Config(format!(
                        "{} must be a whole number of seconds, got '{}'",
                        PRODUCTS_API_TIMEOUT_VAR, raw
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SourceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SourceConfig::default());
        assert_eq!(config.base_url, "https://fakestoreapi.com");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_custom_url_and_timeout() {
        let config = SourceConfig::from_lookup(lookup(&[
            (PRODUCTS_API_URL_VAR, "http://localhost:8080/"),
            (PRODUCTS_API_TIMEOUT_VAR, "15"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_blank_url_falls_back_to_default() {
        let config = SourceConfig::from_lookup(lookup(&[(PRODUCTS_API_URL_VAR, "  ")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_PRODUCTS_API_URL);
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = SourceConfig::from_lookup(lookup(&[(PRODUCTS_API_URL_VAR, "ftp://example.com")])).unwrap_err();
        assert!(matches!(err, ProductsApiError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_timeout() {
        let err = SourceConfig::from_lookup(lookup(&[(PRODUCTS_API_TIMEOUT_VAR, "soon")])).unwrap_err();
        assert!(err.to_string().contains(PRODUCTS_API_TIMEOUT_VAR));
    }
}
