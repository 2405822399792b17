//! Contains convenience type alias and function for [AppState] that uses
//! the SQLite backend.

pub mod category;
pub mod product;

pub use category::SQLiteCategoryStore;
pub use product::SQLiteProductStore;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{AppState, Error, db::initialize};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteCategoryStore, SQLiteProductStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database if they do not exist.
pub fn create_app_state(db_connection: Connection) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));
    let category_store = SQLiteCategoryStore::new(connection.clone());
    let product_store = SQLiteProductStore::new(connection.clone());

    Ok(AppState::new(category_store, product_store))
}
