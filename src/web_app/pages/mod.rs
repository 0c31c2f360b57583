// web_app/pages/mod.rs - Page components module
//
// - CatalogPage: product list with search, category filter and pagination
// - ProductPage: single product detail

pub mod catalog;
pub mod product;

// Re-export page components
pub use catalog::CatalogPage;
pub use product::ProductPage;
