//! Implements the category service, which validates input and guards
//! referential integrity for category operations.

use crate::{
    Error,
    models::{Category, CategoryData, CategoryName, DatabaseID},
    stores::CategoryStore,
};

/// Validates category operations before they reach the store.
#[derive(Debug, Clone)]
pub struct CategoryService<C>
where
    C: CategoryStore + Send + Sync,
{
    store: C,
}

impl<C> CategoryService<C>
where
    C: CategoryStore + Send + Sync,
{
    /// Create a new category service backed by `store`.
    pub fn new(store: C) -> Self {
        Self { store }
    }

    /// Get all categories, ordered by ascending ID.
    pub fn get_all(&self) -> Result<Vec<Category>, Error> {
        self.store.get_all()
    }

    /// Get the category with `category_id`.
    ///
    /// # Errors
    /// Returns [Error::InvalidId] if `category_id` is not positive, or
    /// [Error::NotFound] if no category matches.
    pub fn get(&self, category_id: DatabaseID) -> Result<Category, Error> {
        if category_id <= 0 {
            return Err(Error::InvalidId);
        }

        self.store.get(category_id)
    }

    /// Validate `data` and create a category.
    ///
    /// # Errors
    /// Returns [Error::EmptyCategoryName] if the name is empty. The
    /// description may be empty.
    pub fn create(&self, data: CategoryData) -> Result<Category, Error> {
        let name = CategoryName::new(&data.name)?;

        self.store.create(name, &data.description)
    }

    /// Validate `data` and replace every field of the category with
    /// `category_id`.
    ///
    /// # Errors
    /// Returns [Error::InvalidId] if `category_id` is not positive,
    /// [Error::EmptyCategoryName] if the name is empty, or
    /// [Error::UpdateMissingCategory] if no category matches.
    pub fn update(&self, category_id: DatabaseID, data: CategoryData) -> Result<Category, Error> {
        if category_id <= 0 {
            return Err(Error::InvalidId);
        }

        let name = CategoryName::new(&data.name)?;

        self.store
            .update(category_id, name.clone(), &data.description)?;

        // The store reported the row as updated, so the replacement can be
        // echoed back without a second query.
        Ok(Category {
            id: category_id,
            name,
            description: data.description,
        })
    }

    /// Delete the category with `category_id`.
    ///
    /// The delete is refused while any product references the category. The
    /// count check gives a specific error up front; the database foreign key
    /// constraint backs it up should a product be created concurrently.
    ///
    /// # Errors
    /// Returns [Error::InvalidId] if `category_id` is not positive,
    /// [Error::CategoryInUse] if products still reference the category, or
    /// [Error::DeleteMissingCategory] if no category matches.
    pub fn delete(&self, category_id: DatabaseID) -> Result<(), Error> {
        if category_id <= 0 {
            return Err(Error::InvalidId);
        }

        if self.store.count_products(category_id)? > 0 {
            return Err(Error::CategoryInUse);
        }

        self.store.delete(category_id)
    }
}
