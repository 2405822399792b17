//! Defines the domain types for the inventory API: categories, products and
//! the projections served by the read endpoints.

mod category;
mod product;

pub use category::{Category, CategoryData, CategoryName};
pub use product::{
    NewProduct, Product, ProductData, ProductDetail, ProductName, ProductSummary,
};

/// Alias for the type used for database row identifiers.
pub type DatabaseID = i64;
