// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel unchanged from the upstream REST endpoint, through
// the server functions, into the catalog state machine on the client.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A catalog item as served by `GET /products`
///
/// Immutable once fetched. Unknown upstream fields are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "deserialize_price"
    )]
    pub price: Decimal,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<ProductRating>,
}

impl Product {
    /// Price formatted for display, e.g. `$109.95`
    pub fn price_display(&self) -> String {
        format_price(self.price)
    }

    /// Category, treating an empty string the same as a missing one
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// `$x.xx`
pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price)
}

/// Map any JSON number onto a price.
///
/// Negative and NaN become zero; anything past `Decimal::MAX` saturates.
/// A single odd price never fails the whole list.
pub fn price_from_f64(raw: f64) -> Decimal {
    if raw.is_nan() || raw <= 0.0 {
        return Decimal::ZERO;
    }
    Decimal::from_f64(raw).unwrap_or(Decimal::MAX)
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(price_from_f64)
}

/// Aggregate customer rating
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductRating {
    pub rate: f64,
    pub count: u32,
}
