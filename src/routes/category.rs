//! This file defines the API routes for the category type.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    AppState,
    models::{CategoryData, DatabaseID},
    stores::{CategoryStore, ProductStore},
};

/// A route handler for listing all categories.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_all_categories<C, P>(State(state): State<AppState<C, P>>) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    P: ProductStore + Send + Sync,
{
    state
        .category_service
        .get_all()
        .map(|categories| (StatusCode::OK, Json(categories)))
}

/// A route handler for creating a new category.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_category<C, P>(
    State(state): State<AppState<C, P>>,
    Json(new_category): Json<CategoryData>,
) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    P: ProductStore + Send + Sync,
{
    state
        .category_service
        .create(new_category)
        .map(|category| (StatusCode::CREATED, Json(category)))
}

/// A route handler for getting a category by its database ID.
///
/// This function will return the status code 404 if the requested resource
/// does not exist (e.g., not created yet).
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_category<C, P>(
    State(state): State<AppState<C, P>>,
    Path(category_id): Path<DatabaseID>,
) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    P: ProductStore + Send + Sync,
{
    state
        .category_service
        .get(category_id)
        .map(|category| (StatusCode::OK, Json(category)))
}

/// A route handler for replacing all fields of a category.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn update_category<C, P>(
    State(state): State<AppState<C, P>>,
    Path(category_id): Path<DatabaseID>,
    Json(updated_category): Json<CategoryData>,
) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    P: ProductStore + Send + Sync,
{
    state
        .category_service
        .update(category_id, updated_category)
        .map(|category| (StatusCode::OK, Json(category)))
}

/// A route handler for deleting a category.
///
/// This function will return the status code 409 if products still reference
/// the category.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn delete_category<C, P>(
    State(state): State<AppState<C, P>>,
    Path(category_id): Path<DatabaseID>,
) -> impl IntoResponse
where
    C: CategoryStore + Send + Sync,
    P: ProductStore + Send + Sync,
{
    state.category_service.delete(category_id).map(|()| {
        (
            StatusCode::OK,
            Json(json!({"message": "Category deleted successfully"})),
        )
    })
}
