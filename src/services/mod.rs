//! Contains the services that enforce validation and referential integrity
//! between the HTTP layer and the [stores](crate::stores).

mod category;
mod product;

pub use category::CategoryService;
pub use product::ProductService;
