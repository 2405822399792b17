//! This file defines the API routes for the product type.
//!
//! Listing products returns the summary view without category columns, while
//! getting a single product returns the detail view with the category name
//! joined in.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    AppState,
    models::{DatabaseID, ProductData},
    stores::{CategoryStore, ProductStore},
};

/// A route handler for listing the summary view of all products.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_all_products<C, P>(State(state): State<AppState<C, P>>) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    P: ProductStore + Send + Sync,
{
    state
        .product_service
        .get_all()
        .map(|products| (StatusCode::OK, Json(products)))
}

/// A route handler for creating a new product.
///
/// This function will return the status code 404 if the product's category
/// does not exist.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_product<C, P>(
    State(state): State<AppState<C, P>>,
    Json(new_product): Json<ProductData>,
) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    P: ProductStore + Send + Sync,
{
    state
        .product_service
        .create(new_product)
        .map(|product| (StatusCode::CREATED, Json(product)))
}

/// A route handler for getting the detail view of a product by its database ID.
///
/// This function will return the status code 404 if the requested resource
/// does not exist (e.g., not created yet).
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_product<C, P>(
    State(state): State<AppState<C, P>>,
    Path(product_id): Path<DatabaseID>,
) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    P: ProductStore + Send + Sync,
{
    state
        .product_service
        .get(product_id)
        .map(|product| (StatusCode::OK, Json(product)))
}

/// A route handler for replacing all fields of a product.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn update_product<C, P>(
    State(state): State<AppState<C, P>>,
    Path(product_id): Path<DatabaseID>,
    Json(updated_product): Json<ProductData>,
) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    P: ProductStore + Send + Sync,
{
    state
        .product_service
        .update(product_id, updated_product)
        .map(|product| (StatusCode::OK, Json(product)))
}

/// A route handler for deleting a product.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn delete_product<C, P>(
    State(state): State<AppState<C, P>>,
    Path(product_id): Path<DatabaseID>,
) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    P: ProductStore + Send + Sync,
{
    state.product_service.delete(product_id).map(|()| {
        (
            StatusCode::OK,
            Json(json!({"message": "Product deleted successfully"})),
        )
    })
}
