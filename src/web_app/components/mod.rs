// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, TextInput, StarRating, etc.)
// - filters.rs: Search, category and page-size controls
// - pagination.rs: Page navigation and results summary
// - product.rs: Product display components (ProductCard, ProductDetail)

pub mod common;
pub mod filters;
pub mod pagination;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use filters::*;
pub use pagination::*;
pub use product::*;
