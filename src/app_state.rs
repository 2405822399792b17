//! Implements a struct that holds the state of the REST server.

use crate::{
    services::{CategoryService, ProductService},
    stores::{CategoryStore, ProductStore},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<C, P>
where
    C: CategoryStore + Send + Sync,
    P: ProductStore + Send + Sync,
{
    /// The service guarding the category store.
    pub category_service: CategoryService<C>,
    /// The service guarding the product store.
    pub product_service: ProductService<P>,
}

impl<C, P> AppState<C, P>
where
    C: CategoryStore + Send + Sync,
    P: ProductStore + Send + Sync,
{
    /// Create a new [AppState] with the given stores.
    pub fn new(category_store: C, product_store: P) -> Self {
        Self {
            category_service: CategoryService::new(category_store),
            product_service: ProductService::new(product_store),
        }
    }
}
