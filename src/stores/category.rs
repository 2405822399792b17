//! Defines the category store trait.

use crate::{
    Error,
    models::{Category, CategoryName, DatabaseID},
};

/// Creates, retrieves and removes product categories.
pub trait CategoryStore {
    /// Create a new category and add it to the store.
    fn create(&self, name: CategoryName, description: &str) -> Result<Category, Error>;

    /// Get a category by its ID.
    fn get(&self, category_id: DatabaseID) -> Result<Category, Error>;

    /// Get all categories, ordered by ascending ID.
    fn get_all(&self) -> Result<Vec<Category>, Error>;

    /// Replace the name and description of the category with `category_id`.
    fn update(
        &self,
        category_id: DatabaseID,
        name: CategoryName,
        description: &str,
    ) -> Result<(), Error>;

    /// Remove the category with `category_id` from the store.
    fn delete(&self, category_id: DatabaseID) -> Result<(), Error>;

    /// Count the products that reference the category with `category_id`.
    fn count_products(&self, category_id: DatabaseID) -> Result<i64, Error>;
}
