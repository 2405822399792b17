//! Defines the product types: the canonical form used for writes plus the
//! reduced and enriched projections served by the read endpoints.

use serde::{Deserialize, Serialize};

use crate::{Error, models::DatabaseID};

/// An item held in stock.
///
/// This is the canonical form used for writes. The read endpoints serve the
/// [ProductSummary] and [ProductDetail] projections instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// The ID of the product.
    pub id: DatabaseID,
    /// The name of the product.
    pub name: ProductName,
    /// The price of one unit in minor currency units (e.g. cents). Always
    /// greater than zero.
    pub price: i64,
    /// How many units are held in stock. Never negative.
    pub stock: i64,
    /// The ID of the category the product belongs to.
    pub category_id: DatabaseID,
}

/// The reduced product shape returned when listing products.
///
/// Deliberately carries no category fields. Clients that need the category
/// fetch the [ProductDetail] view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// The ID of the product.
    pub id: DatabaseID,
    /// The name of the product.
    pub name: ProductName,
    /// The price of one unit in minor currency units.
    pub price: i64,
    /// How many units are held in stock.
    pub stock: i64,
}

/// The enriched product shape returned when fetching a single product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    /// The ID of the product.
    pub id: DatabaseID,
    /// The name of the product.
    pub name: ProductName,
    /// The price of one unit in minor currency units.
    pub price: i64,
    /// How many units are held in stock.
    pub stock: i64,
    /// The ID of the category the product belongs to.
    pub category_id: DatabaseID,
    /// The name of the referenced category, resolved at read time.
    ///
    /// `None` when the category row no longer exists, which can only happen
    /// if it was removed outside of this API.
    pub category_name: Option<String>,
}

/// The fields a client sends to create or replace a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    /// The name of the product.
    pub name: String,
    /// The price of one unit in minor currency units.
    pub price: i64,
    /// How many units are held in stock.
    pub stock: i64,
    /// The ID of the category the product belongs to.
    pub category_id: DatabaseID,
}

/// A product that has passed validation and is ready to be written to a
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// The name of the product.
    pub name: ProductName,
    /// The price of one unit in minor currency units.
    pub price: i64,
    /// How many units are held in stock.
    pub stock: i64,
    /// The ID of the category the product belongs to.
    pub category_id: DatabaseID,
}

/// The name of a product.
///
/// The inner string is guaranteed to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductName(String);

impl ProductName {
    /// Create a product name from `name`.
    ///
    /// Leading and trailing whitespace is trimmed.
    ///
    /// # Errors
    /// This function will return [Error::EmptyProductName] if `name` is empty
    /// or contains only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            Err(Error::EmptyProductName)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Create a product name without validating `name`.
    ///
    /// This should only be used for values that have already been validated,
    /// such as rows read back from the database. This function is not marked
    /// `unsafe` because an invalid name cannot cause memory safety issues.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
