//! Defines the product store trait.

use crate::{
    Error,
    models::{DatabaseID, NewProduct, Product, ProductDetail, ProductSummary},
};

/// Creates, retrieves and removes products.
pub trait ProductStore {
    /// Add a validated product to the store and return it with its assigned
    /// ID.
    fn create(&self, product: NewProduct) -> Result<Product, Error>;

    /// Get the detail view of the product with `product_id`, including the
    /// name of its category.
    fn get(&self, product_id: DatabaseID) -> Result<ProductDetail, Error>;

    /// Get the summary view of all products, ordered by ascending ID.
    fn get_all(&self) -> Result<Vec<ProductSummary>, Error>;

    /// Replace every field of the product with `product_id` with the fields
    /// of `product`.
    fn update(&self, product_id: DatabaseID, product: NewProduct) -> Result<(), Error>;

    /// Remove the product with `product_id` from the store.
    fn delete(&self, product_id: DatabaseID) -> Result<(), Error>;

    /// Check whether a category with `category_id` exists.
    ///
    /// Used to validate the category reference before writing a product.
    fn category_exists(&self, category_id: DatabaseID) -> Result<bool, Error>;
}
