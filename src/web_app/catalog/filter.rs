// web_app/catalog/filter.rs - Filter criteria and the derivations built on them
//
// Pure functions over the fetched product list. Nothing here allocates
// product copies; callers decide when to clone.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::web_app::model::Product;

/// Search text and category selected by the user
///
/// `selected_category == None` means "all categories".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub selected_category: Option<String>,
}

impl FilterCriteria {
    /// Build a category selection from a `<select>` value, where `""` is "all".
    pub fn category_from_input(value: &str) -> Option<String> {
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Whether the user has narrowed the list in any way
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || self.category().is_some()
    }

    /// Selected category; `Some("")` counts as "all" like `None`.
    pub fn category(&self) -> Option<&str> {
        self.selected_category.as_deref().filter(|c| !c.is_empty())
    }

    /// Case-insensitive title match AND category match.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(&self.search_term.to_lowercase(), product) && self.matches_category(product)
    }

    fn matches_search(&self, needle: &str, product: &Product) -> bool {
        needle.is_empty() || product.title.to_lowercase().contains(needle)
    }

    fn matches_category(&self, product: &Product) -> bool {
        match self.category() {
            None => true,
            Some(selected) => product.category.as_deref() == Some(selected),
        }
    }
}

/// Distinct non-empty categories, sorted ascending
pub fn extract_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .filter_map(Product::category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Products matching `criteria`, in their original order
pub fn filter_products<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let needle = criteria.search_term.to_lowercase();
    products
        .iter()
        .filter(|p| criteria.matches_search(&needle, p) && criteria.matches_category(p))
        .collect()
}
