//! Implements a SQLite backed product store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DatabaseID, NewProduct, Product, ProductDetail, ProductName, ProductSummary},
    stores::ProductStore,
};

/// Creates and retrieves products to/from a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteProductStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteProductStore {
    /// Create a new product store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl ProductStore for SQLiteProductStore {
    /// Create a product in the database.
    ///
    /// # Errors
    /// This function will return [Error::CategoryNotFound] if `category_id`
    /// does not refer to an existing category, or [Error::SqlError] if there
    /// is some other SQL error.
    fn create(&self, product: NewProduct) -> Result<Product, Error> {
        let connection = self.connection.lock().unwrap();

        connection
            .execute(
                "INSERT INTO product (name, price, stock, category_id) VALUES (?1, ?2, ?3, ?4);",
                (
                    product.name.as_ref(),
                    product.price,
                    product.stock,
                    product.category_id,
                ),
            )
            .map_err(|error| match error {
                // Code 787 occurs when a FOREIGN KEY constraint failed.
                rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 787 => {
                    Error::CategoryNotFound
                }
                error => error.into(),
            })?;

        let id = connection.last_insert_rowid();

        Ok(Product {
            id,
            name: product.name,
            price: product.price,
            stock: product.stock,
            category_id: product.category_id,
        })
    }

    /// Retrieve the detail view of the product with `product_id`.
    ///
    /// The category name is resolved with a left join so that a product whose
    /// category was removed out-of-band is still readable; its
    /// `category_name` is `None` in that case.
    ///
    /// # Errors
    /// This function will return [Error::NotFound] if there is no product
    /// with `product_id`, or [Error::SqlError] if there is an SQL error.
    fn get(&self, product_id: DatabaseID) -> Result<ProductDetail, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT p.id, p.name, p.price, p.stock, p.category_id, c.name
                FROM product p
                LEFT JOIN category c ON p.category_id = c.id
                WHERE p.id = :id;",
            )?
            .query_row(&[(":id", &product_id)], |row| {
                let raw_name: String = row.get(1)?;

                Ok(ProductDetail {
                    id: row.get(0)?,
                    name: ProductName::new_unchecked(&raw_name),
                    price: row.get(2)?,
                    stock: row.get(3)?,
                    category_id: row.get(4)?,
                    category_name: row.get(5)?,
                })
            })
            .map_err(|error| error.into())
    }

    /// Retrieve the summary view of all products, ordered by ascending ID.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self) -> Result<Vec<ProductSummary>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, price, stock FROM product ORDER BY id ASC;")?
            .query_map([], SQLiteProductStore::map_row)?
            .map(|maybe_product| maybe_product.map_err(|error| error.into()))
            .collect()
    }

    /// Replace every field of the product with `product_id`.
    ///
    /// # Errors
    /// This function will return [Error::CategoryNotFound] if the new
    /// `category_id` does not refer to an existing category,
    /// [Error::UpdateMissingProduct] if there is no product with
    /// `product_id`, or [Error::SqlError] if there is some other SQL error.
    fn update(&self, product_id: DatabaseID, product: NewProduct) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        let rows_affected = connection
            .execute(
                "UPDATE product SET name = ?1, price = ?2, stock = ?3, category_id = ?4 WHERE id = ?5;",
                (
                    product.name.as_ref(),
                    product.price,
                    product.stock,
                    product.category_id,
                    product_id,
                ),
            )
            .map_err(|error| match error {
                // Code 787 occurs when a FOREIGN KEY constraint failed.
                rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 787 => {
                    Error::CategoryNotFound
                }
                error => error.into(),
            })?;

        if rows_affected == 0 {
            return Err(Error::UpdateMissingProduct);
        }

        Ok(())
    }

    /// Remove the product with `product_id` from the database.
    ///
    /// # Errors
    /// This function will return [Error::DeleteMissingProduct] if there is no
    /// product with `product_id`, or [Error::SqlError] if there is an SQL
    /// error.
    fn delete(&self, product_id: DatabaseID) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        let rows_affected =
            connection.execute("DELETE FROM product WHERE id = ?1;", (product_id,))?;

        if rows_affected == 0 {
            return Err(Error::DeleteMissingProduct);
        }

        Ok(())
    }

    /// Check whether a category with `category_id` exists.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn category_exists(&self, category_id: DatabaseID) -> Result<bool, Error> {
        let count: i64 = self
            .connection
            .lock()
            .unwrap()
            .prepare("SELECT COUNT(id) FROM category WHERE id = :id;")?
            .query_row(&[(":id", &category_id)], |row| row.get(0))?;

        Ok(count > 0)
    }
}

impl CreateTable for SQLiteProductStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS product (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                price INTEGER NOT NULL,
                stock INTEGER NOT NULL,
                category_id INTEGER NOT NULL,
                FOREIGN KEY(category_id) REFERENCES category(id) ON UPDATE CASCADE
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteProductStore {
    type ReturnType = ProductSummary;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = row.get(offset)?;

        let raw_name: String = row.get(offset + 1)?;
        let name = ProductName::new_unchecked(&raw_name);

        let price = row.get(offset + 2)?;
        let stock = row.get(offset + 3)?;

        Ok(Self::ReturnType {
            id,
            name,
            price,
            stock,
        })
    }
}
