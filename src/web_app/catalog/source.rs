// web_app/catalog/source.rs - What the product source looks like to the view
//
// The fetch is either pending, resolved with data, or resolved with an error.
// Failures carry no detail: the view only ever shows a generic message.

use crate::web_app::model::Product;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProductFeed {
    #[default]
    Loading,
    Loaded(Vec<Product>),
    Failed,
}

impl ProductFeed {
    /// Map the value of a pending-or-finished fetch into a feed.
    pub fn from_fetch<E>(fetch: Option<Result<Vec<Product>, E>>) -> Self {
        match fetch {
            None => Self::Loading,
            Some(Ok(products)) => Self::Loaded(products),
            Some(Err(_)) => Self::Failed,
        }
    }

    pub fn data(&self) -> Option<&[Product]> {
        match self {
            Self::Loaded(products) => Some(products),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Products to reconcile against; empty until data arrives
    pub fn products(&self) -> &[Product] {
        self.data().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::products::numbered_products;

    #[test]
    fn test_from_fetch_states() {
        let pending = ProductFeed::from_fetch::<String>(None);
        assert!(pending.is_loading());
        assert!(pending.data().is_none());
        assert!(pending.products().is_empty());

        let failed = ProductFeed::from_fetch::<String>(Some(Err("boom".into())));
        assert!(failed.is_error());
        assert!(!failed.is_loading());
        assert!(failed.data().is_none());

        let loaded = ProductFeed::from_fetch::<String>(Some(Ok(numbered_products(3))));
        assert!(!loaded.is_loading());
        assert!(!loaded.is_error());
        assert_eq!(loaded.products().len(), 3);
    }

    #[test]
    fn test_loaded_empty_list_is_not_an_error() {
        let feed = ProductFeed::from_fetch::<String>(Some(Ok(vec![])));
        assert_eq!(feed.data(), Some(&[][..]));
        assert!(!feed.is_error());
    }
}
