//! Categories group related products so that clients can browse stock by
//! kind (e.g. "Food", "Beverages").

use serde::{Deserialize, Serialize};

use crate::{Error, models::DatabaseID};

/// A grouping that products belong to.
///
/// Every product references exactly one category, and a category cannot be
/// deleted while products still reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category.
    pub id: DatabaseID,
    /// The name of the category.
    pub name: CategoryName,
    /// Free-form text describing the category. May be empty.
    pub description: String,
}

/// The name of a category.
///
/// The inner string is guaranteed to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name from `name`.
    ///
    /// Leading and trailing whitespace is trimmed.
    ///
    /// # Errors
    /// This function will return [Error::EmptyCategoryName] if `name` is
    /// empty or contains only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Create a category name without validating `name`.
    ///
    /// This should only be used for values that have already been validated,
    /// such as rows read back from the database. This function is not marked
    /// `unsafe` because an invalid name cannot cause memory safety issues.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The fields a client sends to create or replace a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    /// The name of the category.
    pub name: String,
    /// Free-form text describing the category. Defaults to the empty string
    /// when the client omits it.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod category_name_tests {
    use crate::Error;

    use super::CategoryName;

    #[test]
    fn new_fails_on_empty_string() {
        let name = CategoryName::new("");

        assert_eq!(name, Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_fails_on_whitespace_only_string() {
        let name = CategoryName::new("   \t\n");

        assert_eq!(name, Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_succeeds_on_non_empty_string() {
        let name = CategoryName::new("Beverages").unwrap();

        assert_eq!(name.as_ref(), "Beverages");
    }

    #[test]
    fn new_trims_surrounding_whitespace() {
        let name = CategoryName::new("  Food \n").unwrap();

        assert_eq!(name.as_ref(), "Food");
    }
}
