//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Category, CategoryName, DatabaseID},
    stores::CategoryStore,
};

/// Creates and retrieves product categories to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CategoryStore for SQLiteCategoryStore {
    /// Create a category in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn create(&self, name: CategoryName, description: &str) -> Result<Category, Error> {
        let connection = self.connection.lock().unwrap();
        connection.execute(
            "INSERT INTO category (name, description) VALUES (?1, ?2);",
            (name.as_ref(), description),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Category {
            id,
            name,
            description: description.to_string(),
        })
    }

    /// Retrieve the category with `category_id` from the database.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if there is no category
    /// with `category_id`, or [Error::SqlError] if there is an SQL error.
    fn get(&self, category_id: DatabaseID) -> Result<Category, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, description FROM category WHERE id = :id;")?
            .query_row(&[(":id", &category_id)], SQLiteCategoryStore::map_row)
            .map_err(|error| error.into())
    }

    /// Retrieve all categories in the database, ordered by ascending ID.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Category>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, description FROM category ORDER BY id ASC;")?
            .query_map([], SQLiteCategoryStore::map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }

    /// Replace the name and description of the category with `category_id`.
    ///
    /// # Errors
    /// This function will return [Error::UpdateMissingCategory] if there is
    /// no category with `category_id`, or [Error::SqlError] if there is an
    /// SQL error.
    fn update(
        &self,
        category_id: DatabaseID,
        name: CategoryName,
        description: &str,
    ) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        let rows_affected = connection.execute(
            "UPDATE category SET name = ?1, description = ?2 WHERE id = ?3;",
            (name.as_ref(), description, category_id),
        )?;

        if rows_affected == 0 {
            return Err(Error::UpdateMissingCategory);
        }

        Ok(())
    }

    /// Remove the category with `category_id` from the database.
    ///
    /// # Errors
    /// This function will return [Error::CategoryInUse] if products still
    /// reference the category, [Error::DeleteMissingCategory] if there is no
    /// category with `category_id`, or [Error::SqlError] if there is an SQL
    /// error.
    fn delete(&self, category_id: DatabaseID) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        let rows_affected = connection
            .execute("DELETE FROM category WHERE id = ?1;", (category_id,))
            .map_err(|error| match error {
                // Code 787 occurs when a FOREIGN KEY constraint failed.
                rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 787 => {
                    Error::CategoryInUse
                }
                error => error.into(),
            })?;

        if rows_affected == 0 {
            return Err(Error::DeleteMissingCategory);
        }

        Ok(())
    }

    /// Count the products that reference the category with `category_id`.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn count_products(&self, category_id: DatabaseID) -> Result<i64, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT COUNT(id) FROM product WHERE category_id = :category_id;")?
            .query_row(&[(":category_id", &category_id)], |row| row.get(0))
            .map_err(|error| error.into())
    }
}

impl CreateTable for SQLiteCategoryStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS category (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT ''
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteCategoryStore {
    type ReturnType = Category;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = row.get(offset)?;

        let raw_name: String = row.get(offset + 1)?;
        let name = CategoryName::new_unchecked(&raw_name);

        let description = row.get(offset + 2)?;

        Ok(Self::ReturnType {
            id,
            name,
            description,
        })
    }
}
